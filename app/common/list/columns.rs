/// Column values with this prefix name an attribute column rather than one of the list's own columns.
pub const ATTRIBUTE_COLUMN_PREFIX: &str = "attribute:";

pub fn is_attribute_column_value(value: &str) -> bool {
	value.starts_with(ATTRIBUTE_COLUMN_PREFIX)
}

pub fn get_attribute_id_from_column_value(value: &str) -> Option<&str> {
	if is_attribute_column_value(value) {
		Some(&value[ATTRIBUTE_COLUMN_PREFIX.len()..])
	} else {
		None
	}
}

pub fn attribute_column_value(attribute_id: &str) -> String {
	format!("{}{}", ATTRIBUTE_COLUMN_PREFIX, attribute_id)
}

/// An optional column of a list table.
pub trait ListColumn: Copy + PartialEq + 'static {
	/// The value stored in list settings for this column.
	fn key(self) -> &'static str;
	/// The optional columns in table order, with the place attribute columns expand into.
	fn layout() -> &'static [ColumnSlot<Self>];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnSlot<C> {
	Column(C),
	Attributes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedColumn<'a, C> {
	Column(C),
	Attribute(&'a str),
}

impl<'a, C: ListColumn> ResolvedColumn<'a, C> {
	pub fn key(&self) -> String {
		match self {
			ResolvedColumn::Column(column) => column.key().to_owned(),
			ResolvedColumn::Attribute(attribute_id) => attribute_column_value(attribute_id),
		}
	}
}

/// The columns a user chose to display, in the order their settings hold them.
#[derive(Clone, Copy, Debug)]
pub struct DisplayColumns<'a> {
	columns: &'a [String],
}

impl<'a> DisplayColumns<'a> {
	pub fn new(columns: &'a [String]) -> DisplayColumns<'a> {
		DisplayColumns { columns }
	}

	pub fn is_visible(&self, key: &str) -> bool {
		self.columns.iter().any(|column| column == key)
	}

	/// Ids of the attribute columns, in settings order.
	pub fn attribute_ids(&self) -> Vec<&'a str> {
		self.columns
			.iter()
			.filter_map(|column| get_attribute_id_from_column_value(column))
			.collect()
	}

	/// The visible optional columns in table order. The column group, the header and every body row render exactly this sequence, so a column is never present in one and missing from another.
	pub fn resolve<C: ListColumn>(&self) -> Vec<ResolvedColumn<'a, C>> {
		let mut resolved = Vec::new();
		for slot in C::layout() {
			match slot {
				ColumnSlot::Column(column) => {
					if self.is_visible(column.key()) {
						resolved.push(ResolvedColumn::Column(*column));
					}
				}
				ColumnSlot::Attributes => {
					resolved.extend(
						self.attribute_ids()
							.into_iter()
							.map(ResolvedColumn::Attribute),
					);
				}
			}
		}
		resolved
	}
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq)]
enum TestColumn {
	Kind,
	Date,
}

#[cfg(test)]
impl ListColumn for TestColumn {
	fn key(self) -> &'static str {
		match self {
			TestColumn::Kind => "kind",
			TestColumn::Date => "date",
		}
	}

	fn layout() -> &'static [ColumnSlot<Self>] {
		&[
			ColumnSlot::Column(TestColumn::Kind),
			ColumnSlot::Attributes,
			ColumnSlot::Column(TestColumn::Date),
		]
	}
}

#[test]
fn test_attribute_column_values() {
	assert!(is_attribute_column_value("attribute:QXR0cjox"));
	assert!(!is_attribute_column_value("price"));
	assert_eq!(
		get_attribute_id_from_column_value("attribute:QXR0cjox"),
		Some("QXR0cjox")
	);
	assert_eq!(get_attribute_id_from_column_value("date"), None);
	assert_eq!(attribute_column_value("QXR0cjox"), "attribute:QXR0cjox");
}

#[test]
fn test_resolve() {
	let columns = vec![
		"date".to_owned(),
		"attribute:b".to_owned(),
		"unknown".to_owned(),
		"attribute:a".to_owned(),
	];
	let display_columns = DisplayColumns::new(&columns);
	insta::assert_debug_snapshot!(display_columns.resolve::<TestColumn>(), @r###"
 [
     Attribute(
         "b",
     ),
     Attribute(
         "a",
     ),
     Column(
         Date,
     ),
 ]
	"###);
	assert!(!display_columns.is_visible("kind"));
	let columns: Vec<String> = Vec::new();
	assert!(DisplayColumns::new(&columns)
		.resolve::<TestColumn>()
		.is_empty());
}
