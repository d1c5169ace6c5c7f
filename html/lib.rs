use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

pub use html_macro::{component, html};

pub enum Node {
	RawText(RawTextNode),
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Component(ComponentNode),
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

#[derive(Clone)]
pub struct RawTextNode(pub Cow<'static, str>);

#[derive(Clone)]
pub struct EscapedTextNode(pub Cow<'static, str>);

pub struct FragmentNode {
	pub children: Vec<Node>,
}

pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

#[derive(Clone, From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

pub enum ComponentNode {
	Unrendered {
		component: Option<Box<dyn Component>>,
		children: Option<Vec<Node>>,
	},
	Rendered(Box<Node>),
}

/// A component consumes its props and the children passed to it and produces the node it stands for. Use the `#[component]` attribute rather than implementing this by hand.
pub trait Component {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

impl Node {
	pub fn render_to_string(mut self) -> String {
		self.render();
		self.to_string()
	}

	fn render(&mut self) {
		match self {
			Node::Fragment(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Host(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Component(node) => {
				if let ComponentNode::Unrendered {
					component,
					children,
				} = node
				{
					let component = component.take();
					let children = children.take().unwrap_or_default();
					let mut rendered = match component {
						Some(component) => component.render(children),
						None => Node::Fragment(FragmentNode { children }),
					};
					rendered.render();
					*node = ComponentNode::Rendered(Box::new(rendered));
				}
			}
			Node::Vec(node) => {
				for child in node.iter_mut() {
					child.render();
				}
			}
			Node::Option(node) => {
				if let Some(node) = node {
					node.render();
				}
			}
			Node::RawText(_) | Node::EscapedText(_) => {}
		}
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::RawText(node) => write!(f, "{}", node),
			Node::EscapedText(node) => write!(f, "{}", node),
			Node::Fragment(node) => write!(f, "{}", node),
			Node::Host(node) => write!(f, "{}", node),
			Node::Component(node) => write!(f, "{}", node),
			Node::Option(node) => match node {
				Some(node) => write!(f, "{}", node),
				None => Ok(()),
			},
			Node::Vec(nodes) => {
				for node in nodes {
					write!(f, "{}", node)?;
				}
				Ok(())
			}
		}
	}
}

impl std::fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for HostNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(Some(true)) => write!(f, " {}", key)?,
				AttributeValue::Bool(_) => {}
				AttributeValue::String(Some(value)) => {
					write!(f, r#" {}=""#, key)?;
					escape(f, value)?;
					f.write_char('"')?;
				}
				AttributeValue::String(None) => {}
			}
		}
		if self.self_closing {
			return write!(f, " />");
		}
		f.write_char('>')?;
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		write!(f, "</{}>", self.name)
	}
}

impl std::fmt::Display for ComponentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ComponentNode::Rendered(rendered) => write!(f, "{}", rendered),
			// Components are rendered by `render_to_string` before display.
			ComponentNode::Unrendered { .. } => Err(std::fmt::Error),
		}
	}
}

impl std::fmt::Display for RawTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl std::fmt::Display for EscapedTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		escape(f, &self.0)
	}
}

fn escape(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => f.write_str("&gt;")?,
			'<' => f.write_str("&lt;")?,
			'"' => f.write_str("&quot;")?,
			'&' => f.write_str("&amp;")?,
			'\'' => f.write_str("&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<Option<&'static str>> for AttributeValue {
	fn from(value: Option<&'static str>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<RawTextNode> for Node {
	fn from(value: RawTextNode) -> Node {
		Node::RawText(value)
	}
}

impl From<EscapedTextNode> for Node {
	fn from(value: EscapedTextNode) -> Node {
		Node::EscapedText(value)
	}
}

impl From<FragmentNode> for Node {
	fn from(value: FragmentNode) -> Node {
		Node::Fragment(value)
	}
}

impl From<HostNode> for Node {
	fn from(value: HostNode) -> Node {
		Node::Host(value)
	}
}

impl From<Vec<Node>> for Node {
	fn from(value: Vec<Node>) -> Node {
		Node::Vec(value)
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

/// Anything that can contribute a class name to `classes!`.
pub trait ClassName {
	fn class_name(&self) -> Option<&str>;
}

impl ClassName for &str {
	fn class_name(&self) -> Option<&str> {
		Some(*self)
	}
}

impl ClassName for String {
	fn class_name(&self) -> Option<&str> {
		Some(self.as_str())
	}
}

impl<T: ClassName> ClassName for Option<T> {
	fn class_name(&self) -> Option<&str> {
		self.as_ref().and_then(|value| value.class_name())
	}
}

/// Anything that can be the value of a `style!` declaration.
pub trait StyleValue {
	fn style_value(&self) -> Option<&str>;
}

impl StyleValue for &str {
	fn style_value(&self) -> Option<&str> {
		Some(*self)
	}
}

impl StyleValue for String {
	fn style_value(&self) -> Option<&str> {
		Some(self.as_str())
	}
}

impl<T: StyleValue> StyleValue for Option<T> {
	fn style_value(&self) -> Option<&str> {
		self.as_ref().and_then(|value| value.style_value())
	}
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		::html::RawTextNode($t.into())
	};
}

#[macro_export]
macro_rules! text {
	($t:expr) => {
		::html::EscapedTextNode($t.into())
	};
}

/// Joins the class names that are present, skipping `None`s.
#[macro_export]
macro_rules! classes {
	($($class:expr),* $(,)?) => {{
		let mut classes = String::new();
		$(
			if let Some(class) = $crate::ClassName::class_name(&$class) {
				if !classes.is_empty() {
					classes.push(' ');
				}
				classes.push_str(class);
			}
		)*
		classes
	}};
}

/// Builds an inline style from the declarations whose value is present. Evaluates to `None` when no declaration is present.
#[macro_export]
macro_rules! style {
	($($property:expr => $value:expr),* $(,)?) => {{
		let mut style = String::new();
		$(
			if let Some(value) = $crate::StyleValue::style_value(&$value) {
				style.push_str($property);
				style.push_str(": ");
				style.push_str(value);
				style.push(';');
			}
		)*
		if style.is_empty() {
			None
		} else {
			Some(style)
		}
	}};
}
