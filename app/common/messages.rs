use bazaar_deps::serde_json;
use bazaar_util::error::Result;
use std::{collections::BTreeMap, path::Path};

/// A user-facing string: a stable id and the template used when the catalog has no translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageDescriptor {
	pub id: &'static str,
	pub default_message: &'static str,
	pub description: Option<&'static str>,
}

impl MessageDescriptor {
	pub const fn new(id: &'static str, default_message: &'static str) -> MessageDescriptor {
		MessageDescriptor {
			id,
			default_message,
			description: None,
		}
	}

	pub const fn described(
		id: &'static str,
		default_message: &'static str,
		description: &'static str,
	) -> MessageDescriptor {
		MessageDescriptor {
			id,
			default_message,
			description: Some(description),
		}
	}
}

/// A piece of a message with markup. `<emphasis>DEMO</emphasis>` becomes a `Tag` segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageSegment {
	Text(String),
	Tag { tag: String, text: String },
}

/// Translations keyed by message id.
#[derive(Clone, Debug, Default)]
pub struct Messages {
	catalog: BTreeMap<String, String>,
}

impl Messages {
	/// Reads a JSON object of message ids to templates.
	pub fn from_file(path: &Path) -> Result<Messages> {
		let data = std::fs::read(path)?;
		Messages::from_json(&data)
	}

	pub fn from_json(data: &[u8]) -> Result<Messages> {
		let catalog = serde_json::from_slice(data)?;
		Ok(Messages { catalog })
	}

	fn template(&self, descriptor: &MessageDescriptor) -> &str {
		self.catalog
			.get(descriptor.id)
			.map(|template| template.as_str())
			.unwrap_or(descriptor.default_message)
	}

	pub fn format(&self, descriptor: &MessageDescriptor) -> String {
		self.template(descriptor).to_owned()
	}

	pub fn format_with(&self, descriptor: &MessageDescriptor, values: &[(&str, String)]) -> String {
		interpolate(self.template(descriptor), values)
	}

	pub fn format_rich(
		&self,
		descriptor: &MessageDescriptor,
		values: &[(&str, String)],
	) -> Vec<MessageSegment> {
		split_tags(&interpolate(self.template(descriptor), values))
	}
}

/// Replaces every `{name}` placeholder with its value. Unknown placeholders are left as written.
pub fn interpolate(template: &str, values: &[(&str, String)]) -> String {
	let mut output = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(start) = rest.find('{') {
		output.push_str(&rest[..start]);
		let after = &rest[start + 1..];
		match after.find('}') {
			Some(end) => {
				let name = &after[..end];
				match values.iter().find(|(key, _)| *key == name) {
					Some((_, value)) => output.push_str(value),
					None => {
						output.push('{');
						output.push_str(name);
						output.push('}');
					}
				}
				rest = &after[end + 1..];
			}
			None => {
				output.push_str(&rest[start..]);
				rest = "";
			}
		}
	}
	output.push_str(rest);
	output
}

fn split_tags(message: &str) -> Vec<MessageSegment> {
	let mut segments = Vec::new();
	let mut rest = message;
	loop {
		let open = match rest.find('<') {
			Some(open) => open,
			None => break,
		};
		let tag_end = match rest[open..].find('>') {
			Some(tag_end) => open + tag_end,
			None => break,
		};
		let tag = &rest[open + 1..tag_end];
		let closing = format!("</{}>", tag);
		let close = match rest[tag_end..].find(&closing) {
			Some(close) => tag_end + close,
			None => break,
		};
		if open > 0 {
			segments.push(MessageSegment::Text(rest[..open].to_owned()));
		}
		segments.push(MessageSegment::Tag {
			tag: tag.to_owned(),
			text: rest[tag_end + 1..close].to_owned(),
		});
		rest = &rest[close + closing.len()..];
	}
	if !rest.is_empty() {
		segments.push(MessageSegment::Text(rest.to_owned()));
	}
	segments
}

#[test]
fn test_format() {
	const COUNTER: MessageDescriptor = MessageDescriptor::described(
		"zyceue",
		"{count}/{max} orders",
		"placed order counter",
	);
	let messages = Messages::default();
	assert_eq!(
		messages.format_with(
			&COUNTER,
			&[("count", "3".to_owned()), ("max", "10".to_owned())]
		),
		"3/10 orders"
	);
	let messages = Messages::from_json(br#"{"zyceue": "Bestellungen: {count} von {max}"}"#).unwrap();
	assert_eq!(
		messages.format_with(&COUNTER, &[("count", "3".to_owned())]),
		"Bestellungen: 3 von {max}"
	);
}

#[test]
fn test_format_rich() {
	const STOREFRONT: MessageDescriptor =
		MessageDescriptor::new("4gZl/n", "See <emphasis>DEMO STOREFRONT</emphasis>");
	let segments = Messages::default().format_rich(&STOREFRONT, &[]);
	assert_eq!(
		segments,
		vec![
			MessageSegment::Text("See ".to_owned()),
			MessageSegment::Tag {
				tag: "emphasis".to_owned(),
				text: "DEMO STOREFRONT".to_owned(),
			},
		]
	);
	assert_eq!(
		split_tags("a < b"),
		vec![MessageSegment::Text("a < b".to_owned())]
	);
}
