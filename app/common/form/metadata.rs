use super::session::{FieldError, FieldErrorCode};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataInput {
	pub key: String,
	pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataFormData {
	pub metadata: Vec<MetadataInput>,
	pub private_metadata: Vec<MetadataInput>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetadataSection {
	Public,
	Private,
}

impl MetadataSection {
	pub fn field(self) -> &'static str {
		match self {
			MetadataSection::Public => "metadata",
			MetadataSection::Private => "privateMetadata",
		}
	}
}

/// Remembers which metadata sections the user touched. A section is only written back when it was touched, so metadata edited elsewhere in the meantime survives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetadataChangeTrigger {
	metadata_modified: bool,
	private_metadata_modified: bool,
}

impl MetadataChangeTrigger {
	pub fn change(&mut self, section: MetadataSection) {
		match section {
			MetadataSection::Public => self.metadata_modified = true,
			MetadataSection::Private => self.private_metadata_modified = true,
		}
	}

	/// Marks `section` modified when its entries changed.
	pub fn observe(&mut self, section: MetadataSection, before: &[MetadataInput], after: &[MetadataInput]) {
		if before != after {
			self.change(section);
		}
	}

	pub fn is_metadata_modified(&self) -> bool {
		self.metadata_modified
	}

	pub fn is_private_metadata_modified(&self) -> bool {
		self.private_metadata_modified
	}

	pub fn is_modified(&self, section: MetadataSection) -> bool {
		match section {
			MetadataSection::Public => self.metadata_modified,
			MetadataSection::Private => self.private_metadata_modified,
		}
	}

	/// The entries of `section` to submit. A new entity always submits both sections, an existing one only the sections that were modified.
	pub fn select(
		&self,
		section: MetadataSection,
		is_new: bool,
		data: &MetadataFormData,
	) -> Option<Vec<MetadataInput>> {
		if !is_new && !self.is_modified(section) {
			return None;
		}
		let entries = match section {
			MetadataSection::Public => &data.metadata,
			MetadataSection::Private => &data.private_metadata,
		};
		Some(entries.clone())
	}
}

/// Reads metadata written one `key: value` entry per line. Blank lines are skipped.
pub fn parse_metadata_lines(
	section: MetadataSection,
	text: &str,
) -> Result<Vec<MetadataInput>, FieldError> {
	text.lines()
		.map(|line| line.trim())
		.filter(|line| !line.is_empty())
		.map(|line| {
			let mut parts = line.splitn(2, ':');
			let key = parts.next().unwrap_or("").trim();
			let value = parts.next().map(|value| value.trim());
			match value {
				Some(value) if !key.is_empty() => Ok(MetadataInput {
					key: key.to_owned(),
					value: value.to_owned(),
				}),
				_ => Err(FieldError::new(
					section.field(),
					FieldErrorCode::Invalid,
					format!("\"{}\" is not a key: value entry", line),
				)),
			}
		})
		.collect()
}

pub fn format_metadata_lines(entries: &[MetadataInput]) -> String {
	entries
		.iter()
		.map(|entry| format!("{}: {}", entry.key, entry.value))
		.collect::<Vec<_>>()
		.join("\n")
}

#[cfg(test)]
fn entry(key: &str, value: &str) -> MetadataInput {
	MetadataInput {
		key: key.to_owned(),
		value: value.to_owned(),
	}
}

#[test]
fn test_select() {
	let data = MetadataFormData {
		metadata: vec![entry("color", "red")],
		private_metadata: vec![],
	};
	let trigger = MetadataChangeTrigger::default();
	assert_eq!(
		trigger.select(MetadataSection::Public, true, &data),
		Some(vec![entry("color", "red")])
	);
	assert_eq!(
		trigger.select(MetadataSection::Private, true, &data),
		Some(vec![])
	);
	assert_eq!(trigger.select(MetadataSection::Public, false, &data), None);
	assert_eq!(trigger.select(MetadataSection::Private, false, &data), None);
	let mut trigger = MetadataChangeTrigger::default();
	trigger.observe(MetadataSection::Private, &[], &[entry("a", "b")]);
	trigger.observe(MetadataSection::Public, &data.metadata, &data.metadata);
	assert!(!trigger.is_metadata_modified());
	assert!(trigger.is_private_metadata_modified());
	assert_eq!(trigger.select(MetadataSection::Public, false, &data), None);
	assert_eq!(
		trigger.select(MetadataSection::Private, false, &data),
		Some(vec![])
	);
}

#[test]
fn test_lines() {
	let entries = parse_metadata_lines(MetadataSection::Public, "color: red\n\n url : http://a.b/c \n").unwrap();
	assert_eq!(entries, vec![entry("color", "red"), entry("url", "http://a.b/c")]);
	assert_eq!(format_metadata_lines(&entries), "color: red\nurl: http://a.b/c");
	let error = parse_metadata_lines(MetadataSection::Private, "oops").unwrap_err();
	assert_eq!(error.field.as_deref(), Some("privateMetadata"));
	assert_eq!(error.code, FieldErrorCode::Invalid);
}
