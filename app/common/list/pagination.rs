use super::settings::{ListName, ListSettingsUpdate, UpdateListSettings};

/// Where the current page sits in the whole list. The backend computes it, the list only reflects it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageInfo {
	pub has_next_page: bool,
	pub has_previous_page: bool,
	pub start_cursor: Option<String>,
	pub end_cursor: Option<String>,
}

/// A request for the page on one side of a cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageRequest {
	After(String),
	Before(String),
}

impl PageRequest {
	/// The query parameters that carry this request.
	pub fn query(&self) -> (Option<String>, Option<String>) {
		match self {
			PageRequest::After(cursor) => (Some(cursor.clone()), None),
			PageRequest::Before(cursor) => (None, Some(cursor.clone())),
		}
	}

	pub fn from_query(after: Option<&str>, before: Option<&str>) -> Option<PageRequest> {
		match (after, before) {
			(Some(after), _) => Some(PageRequest::After(after.to_owned())),
			(None, Some(before)) => Some(PageRequest::Before(before.to_owned())),
			(None, None) => None,
		}
	}
}

impl PageInfo {
	/// The request for the next page, or nothing when there is no next page.
	pub fn request_next(&self) -> Option<PageRequest> {
		if !self.has_next_page {
			return None;
		}
		self.end_cursor.clone().map(PageRequest::After)
	}

	pub fn request_previous(&self) -> Option<PageRequest> {
		if !self.has_previous_page {
			return None;
		}
		self.start_cursor.clone().map(PageRequest::Before)
	}
}

/// Hands a new page size to whatever persists list settings, unchanged.
pub fn change_rows_number(
	settings: &mut impl UpdateListSettings,
	list: ListName,
	rows_number: usize,
) {
	settings.update_list_settings(list, ListSettingsUpdate::RowNumber(rows_number));
}

#[test]
fn test_requests() {
	let page_info = PageInfo {
		has_next_page: true,
		has_previous_page: false,
		start_cursor: Some("start".to_owned()),
		end_cursor: Some("end".to_owned()),
	};
	assert_eq!(
		page_info.request_next(),
		Some(PageRequest::After("end".to_owned()))
	);
	assert_eq!(page_info.request_previous(), None);
	assert_eq!(PageInfo::default().request_next(), None);
	assert_eq!(
		PageRequest::from_query(None, Some("start")),
		Some(PageRequest::Before("start".to_owned()))
	);
}

#[test]
fn test_change_rows_number() {
	struct Recorder(Vec<(ListName, ListSettingsUpdate)>);
	impl UpdateListSettings for Recorder {
		fn update_list_settings(&mut self, list: ListName, update: ListSettingsUpdate) {
			self.0.push((list, update));
		}
	}
	let mut recorder = Recorder(Vec::new());
	change_rows_number(&mut recorder, ListName::Orders, 37);
	assert_eq!(
		recorder.0,
		vec![(ListName::Orders, ListSettingsUpdate::RowNumber(37))]
	);
}
