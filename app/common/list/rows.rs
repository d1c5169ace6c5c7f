/// Anything a list shows one row for.
pub trait Entity {
	fn id(&self) -> &str;
}

/// What one row of a list table shows.
#[derive(Debug, PartialEq)]
pub enum RowState<'a, T> {
	/// The collection has not loaded, every cell is a placeholder.
	Loading,
	Loaded(&'a T),
	/// The collection loaded empty.
	Absent,
}

impl<'a, T> Clone for RowState<'a, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<'a, T> Copy for RowState<'a, T> {}

impl<'a, T: Entity> RowState<'a, T> {
	/// Identifies the row across renders.
	pub fn key(&self) -> &'a str {
		match *self {
			RowState::Loading => "skeleton",
			RowState::Loaded(entity) => entity.id(),
			RowState::Absent => "empty",
		}
	}

	pub fn entity(&self) -> Option<&'a T> {
		match *self {
			RowState::Loaded(entity) => Some(entity),
			RowState::Loading | RowState::Absent => None,
		}
	}
}

/// One loading row while there is no collection, one absent row for an empty collection, otherwise one loaded row per entity in the order given.
pub fn row_states<T>(collection: Option<&[T]>) -> Vec<RowState<'_, T>> {
	match collection {
		None => vec![RowState::Loading],
		Some(collection) if collection.is_empty() => vec![RowState::Absent],
		Some(collection) => collection.iter().map(RowState::Loaded).collect(),
	}
}

/// Renders a row per entity with `render_row`, which gets `None` for the placeholder row of a collection that has not loaded. An empty collection renders `render_empty` once.
pub fn render_collection<T, R>(
	collection: Option<&[T]>,
	mut render_row: impl FnMut(Option<&T>) -> R,
	render_empty: impl FnOnce() -> R,
) -> Vec<R> {
	let mut render_empty = Some(render_empty);
	row_states(collection)
		.into_iter()
		.filter_map(|row| match row {
			RowState::Loading => Some(render_row(None)),
			RowState::Loaded(entity) => Some(render_row(Some(entity))),
			RowState::Absent => render_empty.take().map(|render_empty| render_empty()),
		})
		.collect()
}

#[cfg(test)]
#[derive(Debug, PartialEq)]
struct Thing(&'static str);

#[cfg(test)]
impl Entity for Thing {
	fn id(&self) -> &str {
		self.0
	}
}

#[test]
fn test_row_states() {
	assert_eq!(row_states::<Thing>(None), vec![RowState::Loading]);
	assert_eq!(row_states::<Thing>(Some(&[])), vec![RowState::Absent]);
	let things = [Thing("b"), Thing("a")];
	let rows = row_states(Some(&things[..]));
	assert_eq!(
		rows.iter().map(|row| row.key()).collect::<Vec<_>>(),
		vec!["b", "a"]
	);
	assert_eq!(RowState::<Thing>::Loading.key(), "skeleton");
	assert_eq!(RowState::<Thing>::Absent.key(), "empty");
}

#[test]
fn test_render_collection() {
	let things = [Thing("a"), Thing("b")];
	let render = |collection: Option<&[Thing]>| {
		render_collection(
			collection,
			|thing| thing.map(|thing| thing.0).unwrap_or("…").to_owned(),
			|| "No things found".to_owned(),
		)
	};
	assert_eq!(render(Some(&things[..])), vec!["a", "b"]);
	assert_eq!(render(Some(&[])), vec!["No things found"]);
	assert_eq!(render(None), vec!["…"]);
}
