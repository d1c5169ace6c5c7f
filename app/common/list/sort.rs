use bazaar_ui as ui;

/// The active sort of a list: a field and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort<F> {
	pub sort: F,
	pub asc: bool,
}

impl<F: SortField> Sort<F> {
	/// The sort requested by clicking the header of `field`. Clicking the active field flips the direction, any other field starts ascending.
	pub fn toggle(&self, field: F) -> Sort<F> {
		if self.sort == field {
			Sort {
				sort: field,
				asc: !self.asc,
			}
		} else {
			Sort {
				sort: field,
				asc: true,
			}
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowDirection {
	Ascending,
	Descending,
}

impl ArrowDirection {
	pub fn from_asc(asc: bool) -> ArrowDirection {
		if asc {
			ArrowDirection::Ascending
		} else {
			ArrowDirection::Descending
		}
	}
}

impl From<ArrowDirection> for ui::SortArrow {
	fn from(value: ArrowDirection) -> ui::SortArrow {
		match value {
			ArrowDirection::Ascending => ui::SortArrow::Ascending,
			ArrowDirection::Descending => ui::SortArrow::Descending,
		}
	}
}

/// The arrow shown on the header bound to `target`. Only the header of the active sort field has one.
pub fn arrow_direction<F: PartialEq>(sort: &Sort<F>, target: &F) -> Option<ArrowDirection> {
	if sort.sort == *target {
		Some(ArrowDirection::from_asc(sort.asc))
	} else {
		None
	}
}

/// A field a list can be sorted by, as it appears in the `sort` query parameter.
pub trait SortField: Copy + PartialEq + Sized {
	fn as_str(self) -> &'static str;
	fn parse(value: &str) -> Option<Self>;
	/// Whether sorting by this field needs a channel filter.
	fn requires_channel(self) -> bool {
		false
	}
}

pub fn can_be_sorted<F: SortField>(field: F, channel_selected: bool) -> bool {
	!field.requires_channel() || channel_selected
}

/// What a header cell does about sorting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderSort {
	/// Clicking follows `href`, which requests the toggled sort.
	Sortable {
		href: String,
		arrow: Option<ArrowDirection>,
	},
	/// Sorting is unavailable. The header explains why and requests nothing.
	Disabled { hint: String },
}

impl HeaderSort {
	pub fn new<F: SortField>(
		sort: &Sort<F>,
		field: F,
		channel_selected: bool,
		href: impl FnOnce(Sort<F>) -> String,
		hint: impl FnOnce() -> String,
	) -> HeaderSort {
		if can_be_sorted(field, channel_selected) {
			HeaderSort::Sortable {
				href: href(sort.toggle(field)),
				arrow: arrow_direction(sort, &field),
			}
		} else {
			HeaderSort::Disabled { hint: hint() }
		}
	}

	pub fn arrow(&self) -> Option<ui::SortArrow> {
		match self {
			HeaderSort::Sortable { arrow, .. } => arrow.map(Into::into),
			HeaderSort::Disabled { .. } => None,
		}
	}

	pub fn href(&self) -> Option<String> {
		match self {
			HeaderSort::Sortable { href, .. } => Some(href.clone()),
			HeaderSort::Disabled { .. } => None,
		}
	}

	pub fn is_disabled(&self) -> bool {
		matches!(self, HeaderSort::Disabled { .. })
	}

	pub fn hint(&self) -> String {
		match self {
			HeaderSort::Sortable { .. } => String::new(),
			HeaderSort::Disabled { hint } => hint.clone(),
		}
	}
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq)]
enum TestField {
	Name,
	Price,
}

#[cfg(test)]
impl SortField for TestField {
	fn as_str(self) -> &'static str {
		match self {
			TestField::Name => "name",
			TestField::Price => "price",
		}
	}

	fn parse(value: &str) -> Option<Self> {
		match value {
			"name" => Some(TestField::Name),
			"price" => Some(TestField::Price),
			_ => None,
		}
	}

	fn requires_channel(self) -> bool {
		self == TestField::Price
	}
}

#[test]
fn test_arrow_direction() {
	for &asc in &[true, false] {
		let sort = Sort {
			sort: TestField::Name,
			asc,
		};
		for &target in &[TestField::Name, TestField::Price] {
			let arrow = arrow_direction(&sort, &target);
			if target == sort.sort {
				assert_eq!(arrow, Some(ArrowDirection::from_asc(asc)));
			} else {
				assert_eq!(arrow, None);
			}
		}
	}
}

#[test]
fn test_toggle() {
	let sort = Sort {
		sort: TestField::Name,
		asc: true,
	};
	assert_eq!(
		sort.toggle(TestField::Name),
		Sort {
			sort: TestField::Name,
			asc: false
		}
	);
	let sort = Sort {
		sort: TestField::Name,
		asc: false,
	};
	assert_eq!(
		sort.toggle(TestField::Price),
		Sort {
			sort: TestField::Price,
			asc: true
		}
	);
}

#[test]
fn test_header_sort_disabled_without_channel() {
	let sort = Sort {
		sort: TestField::Price,
		asc: true,
	};
	let header = HeaderSort::new(
		&sort,
		TestField::Price,
		false,
		|sort| format!("?sort={}", sort.sort.as_str()),
		|| "Select a channel".to_owned(),
	);
	assert!(header.is_disabled());
	assert_eq!(header.arrow(), None);
	assert_eq!(header.href(), None);
	assert_eq!(header.hint(), "Select a channel");
	let header = HeaderSort::new(
		&sort,
		TestField::Price,
		true,
		|sort| format!("?sort={}&asc={}", sort.sort.as_str(), sort.asc),
		|| unreachable!(),
	);
	assert_eq!(
		header,
		HeaderSort::Sortable {
			href: "?sort=price&asc=false".to_owned(),
			arrow: Some(ArrowDirection::Ascending),
		}
	);
	assert_eq!(TestField::parse("name"), Some(TestField::Name));
}
