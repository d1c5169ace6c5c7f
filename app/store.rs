use bazaar_app_common::{
	attributes::{
		Attribute, AttributeEntityType, AttributeInputType, AttributeListSortField,
		AttributeType, AttributeValue, MeasurementUnit,
	},
	channels::{Channel, ChannelListing},
	form::{
		metadata::MetadataInput,
		session::{FieldError, FieldErrorCode},
		slug::slugify,
	},
	limits::{is_limit_reached, LimitKind, Limits, Usage},
	list::{
		pagination::{PageInfo, PageRequest},
		sort::Sort,
	},
	money::{Money, MoneyRange},
	orders::{Order, OrderListSortField, OrderSettings, OrderStatus, PaymentStatus, SavedTab},
	products::{GridAttribute, Product, ProductAttribute, ProductListSortField, ProductType},
};
use bazaar_deps::{
	base64,
	chrono::{Duration, NaiveDate, TimeZone, Utc},
	tokio::sync::RwLock,
	tracing,
};
use std::cmp::Ordering;

/// One page of a list, the way a relay connection returns it.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection<T> {
	pub items: Vec<T>,
	pub page_info: PageInfo,
	pub total_count: usize,
}

/// Which page of a list to return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionArgs {
	pub first: usize,
	pub request: Option<PageRequest>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
	#[error("invalid cursor")]
	InvalidCursor,
	#[error("not found")]
	NotFound,
	#[error("limit reached")]
	LimitReached,
}

/// What the attribute page submits to create or update an attribute. Metadata sections that are `None` are left as they are. The type can only be set on create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeInput {
	pub name: String,
	pub slug: String,
	pub attribute_type: Option<AttributeType>,
	pub input_type: AttributeInputType,
	pub entity_type: Option<AttributeEntityType>,
	pub value_required: bool,
	pub visible_in_storefront: bool,
	pub filterable_in_storefront: bool,
	pub filterable_in_dashboard: bool,
	pub available_in_grid: bool,
	pub storefront_search_position: i32,
	pub unit: Option<MeasurementUnit>,
	pub metadata: Option<Vec<MetadataInput>>,
	pub private_metadata: Option<Vec<MetadataInput>>,
}

/// In-memory data for demo deployments. It answers the queries and mutations the pages need.
pub struct Store {
	data: RwLock<StoreData>,
}

struct StoreData {
	next_id: u64,
	channels: Vec<Channel>,
	products: Vec<Product>,
	orders: Vec<Order>,
	attributes: Vec<StoredAttribute>,
	tabs: Vec<SavedTab>,
	order_settings: OrderSettings,
	limits: Limits,
}

struct StoredAttribute {
	attribute: Attribute,
	values: Vec<AttributeValue>,
}

pub fn encode_id(type_name: &str, id: u64) -> String {
	base64::encode_config(format!("{}:{}", type_name, id), base64::URL_SAFE_NO_PAD)
}

fn encode_cursor(index: usize) -> String {
	base64::encode_config(
		format!("arrayconnection:{}", index),
		base64::URL_SAFE_NO_PAD,
	)
}

fn decode_cursor(cursor: &str) -> Result<usize, StoreError> {
	let data = base64::decode_config(cursor, base64::URL_SAFE_NO_PAD)
		.map_err(|_| StoreError::InvalidCursor)?;
	let data = String::from_utf8(data).map_err(|_| StoreError::InvalidCursor)?;
	data.strip_prefix("arrayconnection:")
		.and_then(|index| index.parse().ok())
		.ok_or(StoreError::InvalidCursor)
}

fn attribute_not_found() -> Vec<FieldError> {
	vec![FieldError::new("value", FieldErrorCode::NotFound, "Attribute not found.")]
}

/// The slug for a value named `name`. It must differ from the slugs of the other values, `renamed` being the value that gets it.
fn value_slug(
	values: &[AttributeValue],
	renamed: Option<&str>,
	name: &str,
) -> Result<String, Vec<FieldError>> {
	if name.trim().is_empty() {
		return Err(vec![FieldError::new("value", FieldErrorCode::Required, "This field is required.")]);
	}
	let slug = slugify(name);
	let taken = values
		.iter()
		.filter(|value| Some(value.id.as_str()) != renamed)
		.any(|value| value.slug == slug);
	if taken {
		return Err(vec![FieldError::new(
			"value",
			FieldErrorCode::Unique,
			"Attribute value with this name already exists.",
		)]);
	}
	Ok(slug)
}

/// Cuts one page out of an already sorted list.
pub fn paginate<T>(items: Vec<T>, args: &ConnectionArgs) -> Result<Connection<T>, StoreError> {
	let total_count = items.len();
	let first = args.first.max(1);
	let (start, end) = match &args.request {
		None => (0, first.min(total_count)),
		Some(PageRequest::After(cursor)) => {
			let start = decode_cursor(cursor)?.saturating_add(1).min(total_count);
			(start, start.saturating_add(first).min(total_count))
		}
		Some(PageRequest::Before(cursor)) => {
			let end = decode_cursor(cursor)?.min(total_count);
			(end.saturating_sub(first), end)
		}
	};
	let page_info = PageInfo {
		has_next_page: end < total_count,
		has_previous_page: start > 0,
		start_cursor: if start < end {
			Some(encode_cursor(start))
		} else {
			None
		},
		end_cursor: if start < end {
			Some(encode_cursor(end - 1))
		} else {
			None
		},
	};
	let items = items.into_iter().skip(start).take(end - start).collect();
	Ok(Connection {
		items,
		page_info,
		total_count,
	})
}

fn directed(ordering: Ordering, asc: bool) -> Ordering {
	if asc {
		ordering
	} else {
		ordering.reverse()
	}
}

fn matches_search(value: &str, search: Option<&str>) -> bool {
	match search {
		Some(search) if !search.is_empty() => value.to_lowercase().contains(&search.to_lowercase()),
		_ => true,
	}
}

impl Store {
	pub fn new() -> Store {
		Store {
			data: RwLock::new(StoreData::seed()),
		}
	}

	pub async fn channels(&self) -> Vec<Channel> {
		self.data.read().await.channels.clone()
	}

	pub async fn grid_attributes(&self) -> Vec<GridAttribute> {
		self.data
			.read()
			.await
			.attributes
			.iter()
			.filter(|stored| stored.attribute.available_in_grid)
			.map(|stored| GridAttribute {
				id: stored.attribute.id.clone(),
				name: stored.attribute.name.clone(),
			})
			.collect()
	}

	pub async fn products(
		&self,
		search: Option<&str>,
		channel_id: Option<&str>,
		sort: Sort<ProductListSortField>,
		sort_attribute_id: Option<&str>,
		args: &ConnectionArgs,
	) -> Result<Connection<Product>, StoreError> {
		let data = self.data.read().await;
		let mut products: Vec<Product> = data
			.products
			.iter()
			.filter(|product| matches_search(product.name.as_deref().unwrap_or(""), search))
			.cloned()
			.collect();
		products.sort_by(|a, b| {
			let ordering = match sort.sort {
				ProductListSortField::Name => a.name.cmp(&b.name),
				ProductListSortField::ProductType => a
					.product_type
					.as_ref()
					.map(|product_type| &product_type.name)
					.cmp(&b.product_type.as_ref().map(|product_type| &product_type.name)),
				ProductListSortField::Status => a
					.channel_listing(channel_id)
					.map(|listing| listing.is_published)
					.cmp(&b.channel_listing(channel_id).map(|listing| listing.is_published)),
				ProductListSortField::Price => {
					let price = |product: &Product| {
						product
							.channel_listing(channel_id)
							.and_then(|listing| listing.price_range.as_ref())
							.and_then(|range| range.start.as_ref())
							.map(|money| money.amount)
					};
					price(a).cmp(&price(b))
				}
				ProductListSortField::Attribute => {
					let text = |product: &Product| {
						sort_attribute_id.and_then(|attribute_id| product.attribute_text(attribute_id))
					};
					text(a).cmp(&text(b))
				}
				ProductListSortField::Date => a.updated_at.cmp(&b.updated_at),
			};
			directed(ordering.then_with(|| a.id.cmp(&b.id)), sort.asc)
		});
		paginate(products, args)
	}

	pub async fn delete_products(&self, ids: &[String]) -> usize {
		let mut data = self.data.write().await;
		let before = data.products.len();
		data.products.retain(|product| !ids.contains(&product.id));
		let deleted = before - data.products.len();
		tracing::info!(deleted, "deleted products");
		deleted
	}

	pub async fn orders(
		&self,
		search: Option<&str>,
		sort: Sort<OrderListSortField>,
		args: &ConnectionArgs,
	) -> Result<Connection<Order>, StoreError> {
		let data = self.data.read().await;
		let mut orders: Vec<Order> = data
			.orders
			.iter()
			.filter(|order| {
				matches_search(&order.number.to_string(), search)
					|| matches_search(order.customer.as_deref().unwrap_or(""), search)
			})
			.cloned()
			.collect();
		orders.sort_by(|a, b| {
			let ordering = match sort.sort {
				OrderListSortField::Number => a.number.cmp(&b.number),
				OrderListSortField::Date => a.created.cmp(&b.created),
				OrderListSortField::Customer => a.customer.cmp(&b.customer),
				OrderListSortField::Payment => {
					(a.payment_status as u8).cmp(&(b.payment_status as u8))
				}
				OrderListSortField::Fulfillment => (a.status as u8).cmp(&(b.status as u8)),
			};
			directed(ordering.then_with(|| a.number.cmp(&b.number)), sort.asc)
		});
		paginate(orders, args)
	}

	pub async fn limits(&self) -> Limits {
		self.data.read().await.limits.clone()
	}

	/// Creates an empty draft order, unless the shop reached its order limit.
	pub async fn create_order(&self) -> Result<Order, StoreError> {
		let mut data = self.data.write().await;
		if is_limit_reached(&data.limits, LimitKind::Orders) {
			return Err(StoreError::LimitReached);
		}
		let id = data.next_id();
		let number = data.orders.iter().map(|order| order.number).max().unwrap_or(0) + 1;
		let order = Order {
			id: encode_id("Order", id),
			number,
			created: Utc::now(),
			customer: None,
			payment_status: PaymentStatus::NotCharged,
			status: OrderStatus::Draft,
			total: Money {
				amount: 0,
				currency: "USD".to_owned(),
			},
		};
		data.orders.push(order.clone());
		let orders = data.orders.len() as u64;
		data.limits.current_usage.orders = Some(orders);
		tracing::info!(number, "created order");
		Ok(order)
	}

	pub async fn order_settings(&self) -> OrderSettings {
		self.data.read().await.order_settings.clone()
	}

	pub async fn update_order_settings(&self, settings: OrderSettings) {
		tracing::info!(?settings, "updated order settings");
		self.data.write().await.order_settings = settings;
	}

	pub async fn tabs(&self) -> Vec<SavedTab> {
		self.data.read().await.tabs.clone()
	}

	pub async fn save_tab(&self, name: String, query: String) -> usize {
		let mut data = self.data.write().await;
		data.tabs.push(SavedTab { name, query });
		data.tabs.len()
	}

	pub async fn delete_tab(&self, tab: usize) -> Result<(), StoreError> {
		let mut data = self.data.write().await;
		let index = tab.checked_sub(1).ok_or(StoreError::NotFound)?;
		if index >= data.tabs.len() {
			return Err(StoreError::NotFound);
		}
		data.tabs.remove(index);
		Ok(())
	}

	pub async fn attributes(
		&self,
		search: Option<&str>,
		sort: Sort<AttributeListSortField>,
		args: &ConnectionArgs,
	) -> Result<Connection<Attribute>, StoreError> {
		let data = self.data.read().await;
		let mut attributes: Vec<Attribute> = data
			.attributes
			.iter()
			.map(|stored| &stored.attribute)
			.filter(|attribute| {
				matches_search(&attribute.name, search) || matches_search(&attribute.slug, search)
			})
			.cloned()
			.collect();
		attributes.sort_by(|a, b| {
			let ordering = match sort.sort {
				AttributeListSortField::Name => a.name.cmp(&b.name),
				AttributeListSortField::Slug => a.slug.cmp(&b.slug),
				AttributeListSortField::Visible => a.visible_in_storefront.cmp(&b.visible_in_storefront),
				AttributeListSortField::Searchable => a
					.filterable_in_dashboard
					.cmp(&b.filterable_in_dashboard),
			};
			directed(ordering.then_with(|| a.id.cmp(&b.id)), sort.asc)
		});
		paginate(attributes, args)
	}

	pub async fn attribute(&self, id: &str) -> Option<Attribute> {
		self.data
			.read()
			.await
			.attribute(id)
			.map(|stored| stored.attribute.clone())
	}

	pub async fn attribute_values(
		&self,
		id: &str,
		args: &ConnectionArgs,
	) -> Result<Connection<AttributeValue>, StoreError> {
		let data = self.data.read().await;
		let stored = data.attribute(id).ok_or(StoreError::NotFound)?;
		paginate(stored.values.clone(), args)
	}

	/// Creates an attribute. Fails with field errors the way the API reports them.
	pub async fn create_attribute(&self, input: AttributeInput) -> Result<Attribute, Vec<FieldError>> {
		let mut data = self.data.write().await;
		data.check_slug(&input.slug, None)?;
		let id = data.next_id();
		let attribute = Attribute {
			id: encode_id("Attribute", id),
			name: input.name,
			slug: input.slug,
			attribute_type: input.attribute_type.unwrap_or(AttributeType::ProductType),
			input_type: Some(input.input_type),
			entity_type: input.entity_type,
			value_required: input.value_required,
			visible_in_storefront: input.visible_in_storefront,
			filterable_in_storefront: input.filterable_in_storefront,
			filterable_in_dashboard: input.filterable_in_dashboard,
			available_in_grid: input.available_in_grid,
			storefront_search_position: input.storefront_search_position,
			unit: input.unit,
			metadata: input.metadata.unwrap_or_default(),
			private_metadata: input.private_metadata.unwrap_or_default(),
		};
		data.attributes.push(StoredAttribute {
			attribute: attribute.clone(),
			values: Vec::new(),
		});
		tracing::info!(id = %attribute.id, slug = %attribute.slug, "created attribute");
		Ok(attribute)
	}

	pub async fn update_attribute(
		&self,
		id: &str,
		input: AttributeInput,
	) -> Result<Attribute, Vec<FieldError>> {
		let mut data = self.data.write().await;
		data.check_slug(&input.slug, Some(id))?;
		let stored = data.attribute_mut(id).ok_or_else(|| {
			vec![FieldError {
				field: None,
				code: FieldErrorCode::NotFound,
				message: "Attribute not found.".to_owned(),
			}]
		})?;
		let attribute = &mut stored.attribute;
		attribute.name = input.name;
		attribute.slug = input.slug;
		attribute.input_type = Some(input.input_type);
		attribute.entity_type = input.entity_type;
		attribute.value_required = input.value_required;
		attribute.visible_in_storefront = input.visible_in_storefront;
		attribute.filterable_in_storefront = input.filterable_in_storefront;
		attribute.filterable_in_dashboard = input.filterable_in_dashboard;
		attribute.available_in_grid = input.available_in_grid;
		attribute.storefront_search_position = input.storefront_search_position;
		attribute.unit = input.unit;
		if let Some(metadata) = input.metadata {
			attribute.metadata = metadata;
		}
		if let Some(private_metadata) = input.private_metadata {
			attribute.private_metadata = private_metadata;
		}
		tracing::info!(id, "updated attribute");
		Ok(attribute.clone())
	}

	pub async fn delete_attribute(&self, id: &str) -> Result<(), StoreError> {
		let mut data = self.data.write().await;
		let before = data.attributes.len();
		data.attributes.retain(|stored| stored.attribute.id != id);
		if data.attributes.len() == before {
			return Err(StoreError::NotFound);
		}
		tracing::info!(id, "deleted attribute");
		Ok(())
	}

	pub async fn add_value(&self, attribute_id: &str, name: &str) -> Result<AttributeValue, Vec<FieldError>> {
		let mut data = self.data.write().await;
		let id = data.next_id();
		let stored = data.attribute_mut(attribute_id).ok_or_else(attribute_not_found)?;
		let slug = value_slug(&stored.values, None, name)?;
		let value = AttributeValue {
			id: encode_id("AttributeValue", id),
			name: name.trim().to_owned(),
			slug,
		};
		stored.values.push(value.clone());
		Ok(value)
	}

	pub async fn update_value(
		&self,
		attribute_id: &str,
		value_id: &str,
		name: &str,
	) -> Result<AttributeValue, Vec<FieldError>> {
		let mut data = self.data.write().await;
		let stored = data.attribute_mut(attribute_id).ok_or_else(attribute_not_found)?;
		let slug = value_slug(&stored.values, Some(value_id), name)?;
		let value = stored
			.values
			.iter_mut()
			.find(|value| value.id == value_id)
			.ok_or_else(|| vec![FieldError::new("value", FieldErrorCode::NotFound, "Value not found.")])?;
		value.name = name.trim().to_owned();
		value.slug = slug;
		Ok(value.clone())
	}

	pub async fn delete_value(&self, attribute_id: &str, value_id: &str) -> Result<(), StoreError> {
		let mut data = self.data.write().await;
		let stored = data.attribute_mut(attribute_id).ok_or(StoreError::NotFound)?;
		let before = stored.values.len();
		stored.values.retain(|value| value.id != value_id);
		if stored.values.len() == before {
			return Err(StoreError::NotFound);
		}
		Ok(())
	}

	/// Moves a value by `offset` places, clamped to the ends of the list.
	pub async fn move_value(
		&self,
		attribute_id: &str,
		value_id: &str,
		offset: i64,
	) -> Result<(), StoreError> {
		let mut data = self.data.write().await;
		let stored = data.attribute_mut(attribute_id).ok_or(StoreError::NotFound)?;
		let index = stored
			.values
			.iter()
			.position(|value| value.id == value_id)
			.ok_or(StoreError::NotFound)?;
		let last = stored.values.len() as i64 - 1;
		let target = (index as i64 + offset).max(0).min(last) as usize;
		let value = stored.values.remove(index);
		stored.values.insert(target, value);
		Ok(())
	}
}

impl Default for Store {
	fn default() -> Store {
		Store::new()
	}
}

impl StoreData {
	fn next_id(&mut self) -> u64 {
		self.next_id += 1;
		self.next_id
	}

	fn attribute(&self, id: &str) -> Option<&StoredAttribute> {
		self.attributes.iter().find(|stored| stored.attribute.id == id)
	}

	fn attribute_mut(&mut self, id: &str) -> Option<&mut StoredAttribute> {
		self.attributes
			.iter_mut()
			.find(|stored| stored.attribute.id == id)
	}

	fn check_slug(&self, slug: &str, id: Option<&str>) -> Result<(), Vec<FieldError>> {
		let taken = self
			.attributes
			.iter()
			.any(|stored| stored.attribute.slug == slug && Some(stored.attribute.id.as_str()) != id);
		if taken {
			Err(vec![FieldError::new(
				"slug",
				FieldErrorCode::Unique,
				"Attribute with this Slug already exists.",
			)])
		} else {
			Ok(())
		}
	}

	fn seed() -> StoreData {
		let mut data = StoreData {
			next_id: 0,
			channels: Vec::new(),
			products: Vec::new(),
			orders: Vec::new(),
			attributes: Vec::new(),
			tabs: Vec::new(),
			order_settings: OrderSettings::default(),
			limits: Limits::default(),
		};
		for (slug, name, currency) in &[
			("default-channel", "Channel-USD", "USD"),
			("channel-pln", "Channel-PLN", "PLN"),
		] {
			data.channels.push(Channel {
				id: (*slug).to_owned(),
				name: (*name).to_owned(),
				currency_code: (*currency).to_owned(),
			});
		}
		let seeded_attributes: &[(&str, AttributeInputType, bool, &[&str])] = &[
			("Color", AttributeInputType::Dropdown, true, &["Red", "Blue", "Black", "White"]),
			("Size", AttributeInputType::Dropdown, true, &["XS", "S", "M", "L", "XL", "XXL"]),
			("Material", AttributeInputType::Multiselect, true, &["Cotton", "Polyester", "Wool"]),
			("Flavor", AttributeInputType::Dropdown, false, &["Apple", "Banana", "Cherry"]),
			("Weight", AttributeInputType::Numeric, false, &[]),
			("Description", AttributeInputType::RichText, false, &[]),
		];
		for (name, input_type, available_in_grid, values) in seeded_attributes {
			let id = data.next_id();
			let values = values
				.iter()
				.map(|value| {
					let value_id = data.next_id();
					AttributeValue {
						id: encode_id("AttributeValue", value_id),
						name: (*value).to_owned(),
						slug: slugify(value),
					}
				})
				.collect();
			data.attributes.push(StoredAttribute {
				attribute: Attribute {
					id: encode_id("Attribute", id),
					name: (*name).to_owned(),
					slug: slugify(name),
					attribute_type: AttributeType::ProductType,
					input_type: Some(*input_type),
					entity_type: None,
					value_required: true,
					visible_in_storefront: true,
					filterable_in_storefront: *available_in_grid,
					filterable_in_dashboard: true,
					available_in_grid: *available_in_grid,
					storefront_search_position: 0,
					unit: if *input_type == AttributeInputType::Numeric {
						Some(MeasurementUnit::Kg)
					} else {
						None
					},
					metadata: Vec::new(),
					private_metadata: Vec::new(),
				},
				values,
			});
		}
		let product_types = ["T-Shirt", "Hoodie", "Juice", "Cushion"];
		let adjectives = ["Red", "Blue", "Black", "White", "Classic", "Organic"];
		let color_id = data.attributes[0].attribute.id.clone();
		let size_id = data.attributes[1].attribute.id.clone();
		let base = Utc
			.with_ymd_and_hms(2023, 3, 1, 9, 0, 0)
			.single()
			.unwrap_or_else(Utc::now);
		for index in 0..36u64 {
			let id = data.next_id();
			let product_type = product_types[index as usize % product_types.len()];
			let adjective = adjectives[index as usize % adjectives.len()];
			let price = 500 + (index as i64 * 137) % 4000;
			let channel_listings = data
				.channels
				.iter()
				.enumerate()
				.map(|(channel_index, channel)| ChannelListing {
					channel: channel.clone(),
					is_published: (index + channel_index as u64) % 3 != 0,
					publication_date: if (index + channel_index as u64) % 3 == 0 && index % 2 == 0 {
						NaiveDate::from_ymd_opt(2030, 1, 1)
					} else {
						None
					},
					price_range: Some(MoneyRange {
						start: Some(Money {
							amount: price,
							currency: channel.currency_code.clone(),
						}),
						stop: Some(Money {
							amount: price + (index as i64 % 3) * 250,
							currency: channel.currency_code.clone(),
						}),
					}),
				})
				.collect();
			data.products.push(Product {
				id: encode_id("Product", id),
				name: Some(format!("{} {} {}", adjective, product_type, index + 1)),
				thumbnail: None,
				product_type: Some(ProductType {
					id: encode_id("ProductType", index % product_types.len() as u64 + 1),
					name: product_type.to_owned(),
				}),
				channel_listings: Some(channel_listings),
				attributes: Some(vec![
					ProductAttribute {
						attribute_id: color_id.clone(),
						values: vec![adjective.to_owned()],
					},
					ProductAttribute {
						attribute_id: size_id.clone(),
						values: vec!["S".to_owned(), "M".to_owned()],
					},
				]),
				updated_at: Some(base + Duration::hours(index as i64 * 7)),
			});
		}
		let customers = [
			"anna.jones@example.com",
			"lee.smith@example.com",
			"maria.garcia@example.com",
		];
		let statuses = [
			OrderStatus::Unfulfilled,
			OrderStatus::Fulfilled,
			OrderStatus::PartiallyFulfilled,
			OrderStatus::Unconfirmed,
			OrderStatus::Canceled,
		];
		let payments = [
			PaymentStatus::FullyCharged,
			PaymentStatus::NotCharged,
			PaymentStatus::PartiallyCharged,
			PaymentStatus::Refunded,
		];
		for index in 0..45u64 {
			let id = data.next_id();
			data.orders.push(Order {
				id: encode_id("Order", id),
				number: index + 1,
				created: base + Duration::hours(index as i64 * 5),
				customer: if index % 7 == 0 {
					None
				} else {
					Some(customers[index as usize % customers.len()].to_owned())
				},
				payment_status: payments[index as usize % payments.len()],
				status: statuses[index as usize % statuses.len()],
				total: Money {
					amount: 1999 + index as i64 * 311,
					currency: "USD".to_owned(),
				},
			});
		}
		data.limits = Limits {
			current_usage: Usage {
				orders: Some(data.orders.len() as u64),
				..Usage::default()
			},
			allowed_usage: Usage {
				orders: Some(50),
				..Usage::default()
			},
		};
		data
	}
}

#[cfg(test)]
fn args(first: usize, request: Option<PageRequest>) -> ConnectionArgs {
	ConnectionArgs { first, request }
}

#[test]
fn test_paginate() {
	let items: Vec<u32> = (0..5).collect();
	let page = paginate(items.clone(), &args(2, None)).unwrap();
	assert_eq!(page.items, vec![0, 1]);
	assert!(page.page_info.has_next_page);
	assert!(!page.page_info.has_previous_page);
	let next = page.page_info.request_next().unwrap();
	let page = paginate(items.clone(), &args(2, Some(next))).unwrap();
	assert_eq!(page.items, vec![2, 3]);
	assert!(page.page_info.has_previous_page);
	let next = page.page_info.request_next().unwrap();
	let page = paginate(items.clone(), &args(2, Some(next))).unwrap();
	assert_eq!(page.items, vec![4]);
	assert!(!page.page_info.has_next_page);
	assert!(page.page_info.request_next().is_none());
	let previous = page.page_info.request_previous().unwrap();
	let page = paginate(items.clone(), &args(2, Some(previous))).unwrap();
	assert_eq!(page.items, vec![2, 3]);
	assert_eq!(
		paginate(items, &args(2, Some(PageRequest::After("garbage".to_owned())))),
		Err(StoreError::InvalidCursor)
	);
	let page = paginate(Vec::<u32>::new(), &args(2, None)).unwrap();
	assert!(page.items.is_empty());
	assert_eq!(page.page_info, PageInfo::default());
}

#[test]
fn test_paginate_huge_page_and_cursor() {
	let items: Vec<u32> = (0..5).collect();
	let page = paginate(items.clone(), &args(usize::MAX, Some(PageRequest::After(encode_cursor(0))))).unwrap();
	assert_eq!(page.items, vec![1, 2, 3, 4]);
	assert!(!page.page_info.has_next_page);
	let page = paginate(items.clone(), &args(2, Some(PageRequest::After(encode_cursor(usize::MAX))))).unwrap();
	assert!(page.items.is_empty());
	assert!(page.page_info.has_previous_page);
	let page = paginate(items, &args(usize::MAX, Some(PageRequest::Before(encode_cursor(usize::MAX))))).unwrap();
	assert_eq!(page.items, vec![0, 1, 2, 3, 4]);
}

#[cfg(test)]
#[tokio::test]
async fn test_attribute_slug_must_be_unique() {
	let store = Store::new();
	let input = AttributeInput {
		name: "Color".to_owned(),
		slug: "color".to_owned(),
		attribute_type: Some(AttributeType::ProductType),
		input_type: AttributeInputType::Dropdown,
		entity_type: None,
		value_required: true,
		visible_in_storefront: true,
		filterable_in_storefront: true,
		filterable_in_dashboard: true,
		available_in_grid: true,
		storefront_search_position: 0,
		unit: None,
		metadata: None,
		private_metadata: None,
	};
	let errors = store.create_attribute(input.clone()).await.unwrap_err();
	assert_eq!(errors[0].field.as_deref(), Some("slug"));
	assert_eq!(errors[0].code, FieldErrorCode::Unique);
	let created = store
		.create_attribute(AttributeInput {
			slug: "colour".to_owned(),
			..input
		})
		.await
		.unwrap();
	assert_eq!(created.slug, "colour");
	assert!(store.attribute(&created.id).await.is_some());
}

#[cfg(test)]
#[tokio::test]
async fn test_attribute_values() {
	let store = Store::new();
	let attribute_id = encode_id("Attribute", 1);
	let first = ConnectionArgs {
		first: 100,
		request: None,
	};
	let values = store.attribute_values(&attribute_id, &first).await.unwrap();
	assert_eq!(values.total_count, 4);
	let added = store.add_value(&attribute_id, "Green").await.unwrap();
	assert_eq!(added.slug, "green");
	assert!(store.add_value(&attribute_id, "green").await.is_err());
	let renamed = store.update_value(&attribute_id, &added.id, "Red").await.unwrap_err();
	assert_eq!(renamed[0].code, FieldErrorCode::Unique);
	let renamed = store.update_value(&attribute_id, &added.id, "Green ").await.unwrap();
	assert_eq!(renamed.name, "Green");
	assert!(store.update_value(&attribute_id, "missing", "Teal").await.is_err());
	store.move_value(&attribute_id, &added.id, -10).await.unwrap();
	let values = store.attribute_values(&attribute_id, &first).await.unwrap();
	assert_eq!(values.items[0].name, "Green");
	store.delete_value(&attribute_id, &added.id).await.unwrap();
	assert_eq!(
		store.delete_value(&attribute_id, &added.id).await,
		Err(StoreError::NotFound)
	);
}

#[cfg(test)]
#[tokio::test]
async fn test_create_order_respects_limit() {
	let store = Store::new();
	for _ in 0..5 {
		store.create_order().await.unwrap();
	}
	assert_eq!(store.create_order().await, Err(StoreError::LimitReached));
}
