/// The ids of the selected rows, in the order they were selected. Ids that no longer correspond to a loaded row are kept until the selection is reset or replaced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	ids: Vec<String>,
}

impl Selection {
	pub fn new() -> Selection {
		Selection::default()
	}

	/// Reads the comma separated `selected` query parameter. Empty entries and duplicates are dropped.
	pub fn from_query(value: Option<&str>) -> Selection {
		let mut selection = Selection::new();
		if let Some(value) = value {
			for id in value.split(',').filter(|id| !id.is_empty()) {
				if !selection.is_selected(id) {
					selection.ids.push(id.to_owned());
				}
			}
		}
		selection
	}

	pub fn to_query(&self) -> Option<String> {
		if self.ids.is_empty() {
			None
		} else {
			Some(self.ids.join(","))
		}
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.ids.iter().any(|selected| selected == id)
	}

	pub fn toggle(&mut self, id: &str) {
		match self.ids.iter().position(|selected| selected == id) {
			Some(index) => {
				self.ids.remove(index);
			}
			None => self.ids.push(id.to_owned()),
		}
	}

	/// The selection after toggling `id`, leaving this one as is.
	pub fn toggled(&self, id: &str) -> Selection {
		let mut selection = self.clone();
		selection.toggle(id);
		selection
	}

	/// Whether every loaded row, and nothing else, is selected.
	pub fn is_all_selected<'a>(&self, loaded: impl IntoIterator<Item = &'a str>) -> bool {
		let mut count = 0;
		for id in loaded {
			if !self.is_selected(id) {
				return false;
			}
			count += 1;
		}
		count > 0 && count == self.ids.len()
	}

	/// Selects exactly the loaded rows, or clears the selection when they are all selected already. Either way it happens in one step.
	pub fn toggle_all<'a>(&mut self, loaded: impl IntoIterator<Item = &'a str> + Clone) {
		if self.is_all_selected(loaded.clone()) {
			self.reset();
		} else {
			self.ids.clear();
			for id in loaded {
				if !self.is_selected(id) {
					self.ids.push(id.to_owned());
				}
			}
		}
	}

	pub fn toggled_all<'a>(&self, loaded: impl IntoIterator<Item = &'a str> + Clone) -> Selection {
		let mut selection = self.clone();
		selection.toggle_all(loaded);
		selection
	}

	pub fn reset(&mut self) {
		self.ids.clear();
	}

	pub fn ids(&self) -> &[String] {
		&self.ids
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}
}

#[test]
fn test_toggle() {
	let mut selection = Selection::new();
	selection.toggle("a");
	selection.toggle("b");
	assert!(selection.is_selected("a"));
	assert_eq!(selection.len(), 2);
	selection.toggle("a");
	assert!(!selection.is_selected("a"));
	assert_eq!(selection.ids(), &["b".to_owned()]);
	// Toggling an id that is not on the page is fine.
	selection.toggle("gone");
	assert!(selection.is_selected("gone"));
}

#[test]
fn test_toggle_all() {
	let loaded = vec!["a", "b", "c"];
	let mut selection = Selection::new();
	selection.toggle_all(loaded.iter().copied());
	assert!(selection.is_all_selected(loaded.iter().copied()));
	assert_eq!(selection.ids(), &["a", "b", "c"]);
	selection.toggle_all(loaded.iter().copied());
	assert_eq!(selection, Selection::new());
	// A partial selection, including a stale id, becomes exactly the loaded rows.
	let mut selection = Selection::from_query(Some("b,stale"));
	selection.toggle_all(loaded.iter().copied());
	assert_eq!(selection.ids(), &["a", "b", "c"]);
	assert!(!selection.is_selected("stale"));
}

#[test]
fn test_toggle_all_twice_restores() {
	let loaded = vec!["x", "y"];
	for start in &[Selection::new(), Selection::from_query(Some("x,y"))] {
		let mut selection = start.clone();
		selection.toggle_all(loaded.iter().copied());
		selection.toggle_all(loaded.iter().copied());
		assert_eq!(&selection, start);
	}
}

#[test]
fn test_query() {
	let selection = Selection::from_query(Some("a,,b,a"));
	assert_eq!(selection.to_query(), Some("a,b".to_owned()));
	assert_eq!(Selection::from_query(None).to_query(), None);
	assert_eq!(selection.toggled("a").to_query(), Some("b".to_owned()));
	assert!(!Selection::new().is_all_selected(Vec::<&str>::new()));
}
