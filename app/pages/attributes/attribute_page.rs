use crate::{
	helpers::{form_value, pagination_labels, savebar_labels},
	store::AttributeInput,
};
use bazaar_app_common::{
	attributes::{
		Attribute, AttributeEntityType, AttributeInputType, AttributeType, AttributeValue,
		MeasurementUnit,
	},
	form::{
		metadata::{
			format_metadata_lines, parse_metadata_lines, MetadataChangeTrigger, MetadataFormData,
			MetadataSection,
		},
		session::{FieldError, FieldErrorCode, FormSession},
		slug::{slug_or_default, slugify},
	},
	list::{
		pagination::PageInfo,
		rows::{render_collection, Entity},
		settings::ROWS_NUMBER_CHOICES,
	},
	messages::{MessageDescriptor, Messages},
	urls::{attribute_list_url, attribute_values_url, ListQuery},
};
use bazaar_app_layouts::{
	app_layout::{AppLayout, AppLayoutInfo},
	detailed_content::{Content, DetailedContent, RightSidebar, TopNav},
};
use bazaar_ui as ui;
use html::{html, Node};

pub const CREATE_TITLE: MessageDescriptor =
	MessageDescriptor::described("8cUEPV", "Create New Attribute", "page title");
const GENERAL_INFORMATION: MessageDescriptor =
	MessageDescriptor::described("TDaF6J", "General Information", "section header");
const NAME: MessageDescriptor =
	MessageDescriptor::described("cOlO2s", "Default Label", "attribute's label");
const SLUG: MessageDescriptor =
	MessageDescriptor::described("ZfA1fX", "Attribute Code", "attribute's slug short code label");
const SLUG_HELP: MessageDescriptor = MessageDescriptor::described(
	"mWfHm0",
	"This is used internally. Make sure you don’t use spaces",
	"attribute slug input field helper text",
);
const INPUT_TYPE: MessageDescriptor =
	MessageDescriptor::described("Chw7zN", "Catalog Input type for Store Owner", "attribute's editor component");
const ENTITY_TYPE: MessageDescriptor =
	MessageDescriptor::described("MMhwOV", "Entity", "attribute's editor component entity");
const UNIT: MessageDescriptor = MessageDescriptor::described("Bd9lm7", "Unit", "attribute unit");
const NO_UNIT: MessageDescriptor = MessageDescriptor::described("3WSqjk", "None", "no unit");
const NO_ENTITY: MessageDescriptor = MessageDescriptor::described("bRLzh8", "None", "no entity type");
const VALUE_REQUIRED: MessageDescriptor =
	MessageDescriptor::described("O4vTCk", "Value Required", "check to require attribute to have value");
const VALUES: MessageDescriptor =
	MessageDescriptor::described("J3uE0t", "Attribute Values", "section header");
const VALUE_ADMIN: MessageDescriptor = MessageDescriptor::described("WJuGIA", "Admin", "attribute values list: slug column header");
const VALUE_NAME: MessageDescriptor = MessageDescriptor::described(
	"XhRUzT",
	"Default Store View",
	"attribute values list: name column header",
);
const NO_VALUES: MessageDescriptor = MessageDescriptor::described("g5zIpS", "No values found", "no attribute values");
const NEW_VALUE: MessageDescriptor = MessageDescriptor::described("JXTiWu", "Value name", "attribute value");
const ASSIGN_VALUE: MessageDescriptor =
	MessageDescriptor::described("+iVKR1", "Assign value", "assign value to attribute, button");
const SAVE_VALUE_FIRST: MessageDescriptor = MessageDescriptor::described(
	"VrjHhw",
	"Values can be added once the attribute is saved",
	"attribute values of an attribute that does not exist yet",
);
const RENAME_VALUE: MessageDescriptor = MessageDescriptor::described("7GspM8", "Rename", "button");
const MOVE_UP: MessageDescriptor = MessageDescriptor::described("rGUUvu", "Move up", "button");
const MOVE_DOWN: MessageDescriptor = MessageDescriptor::described("dOT8Bf", "Move down", "button");
const DELETE_VALUE: MessageDescriptor = MessageDescriptor::described("ZIZTG2", "Delete value", "button");
const METADATA: MessageDescriptor = MessageDescriptor::described("8Q504V", "Metadata", "section header");
const PRIVATE_METADATA: MessageDescriptor =
	MessageDescriptor::described("ETHnjq", "Private Metadata", "section header");
const METADATA_PLACEHOLDER: MessageDescriptor =
	MessageDescriptor::described("uTGHyZ", "key: value, one entry per line", "metadata field placeholder");
const ORGANIZATION: MessageDescriptor =
	MessageDescriptor::described("Pbc4Ec", "Organization", "section header");
const ATTRIBUTE_CLASS: MessageDescriptor =
	MessageDescriptor::described("ZMKB6h", "Attribute Class", "attribute type");
const PROPERTIES: MessageDescriptor =
	MessageDescriptor::described("+fPT0T", "Properties", "attribute properties regarding storefront");
const STOREFRONT_PROPERTIES: MessageDescriptor =
	MessageDescriptor::described("8cEDN6", "Storefront Properties", "attribute properties regarding storefront");
const VISIBLE_IN_STOREFRONT: MessageDescriptor = MessageDescriptor::described(
	"x3A4Fi",
	"Visible on Product Page in Storefront",
	"attribute",
);
const FILTERABLE_IN_STOREFRONT: MessageDescriptor =
	MessageDescriptor::described("Wnl9bv", "Use in Faceted Navigation", "attribute is filterable in storefront");
const STOREFRONT_SEARCH_POSITION: MessageDescriptor =
	MessageDescriptor::described("D+sDBZ", "Position in faceted navigation", "attribute position in storefront filters");
const DASHBOARD_PROPERTIES: MessageDescriptor =
	MessageDescriptor::described("Rm5xtd", "Dashboard Properties", "attribute properties regarding dashboard");
const FILTERABLE_IN_DASHBOARD: MessageDescriptor = MessageDescriptor::described(
	"ZYGO2D",
	"Use in Filtering",
	"use attribute in filtering",
);
const AVAILABLE_IN_GRID: MessageDescriptor = MessageDescriptor::described(
	"7E8GKA",
	"Add to Column Options",
	"add attribute as column in product list table",
);
const NAME_REQUIRED: MessageDescriptor = MessageDescriptor::new("TxLKiu", "This field is required");
const INVALID_POSITION: MessageDescriptor =
	MessageDescriptor::new("cV0ZKR", "Position must be a whole number");
const INVALID_CHOICE: MessageDescriptor = MessageDescriptor::new("fhLMuV", "Select a valid choice");

pub const FORM_ID: &str = "attribute-form";

/// Fields backend errors can point at. Errors about anything else are shown for the whole form.
pub const KNOWN_FIELDS: [&str; 8] = [
	"name",
	"slug",
	"inputType",
	"entityType",
	"unit",
	"storefrontSearchPosition",
	"metadata",
	"privateMetadata",
];

/// The draft of the attribute page. The search position stays text until submit so whatever the user typed can be shown back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributePageFormData {
	pub attribute_type: AttributeType,
	pub available_in_grid: bool,
	pub entity_type: Option<AttributeEntityType>,
	pub filterable_in_dashboard: bool,
	pub filterable_in_storefront: bool,
	pub input_type: AttributeInputType,
	pub metadata: MetadataFormData,
	pub name: String,
	pub slug: String,
	pub storefront_search_position: String,
	pub unit: Option<MeasurementUnit>,
	pub value_required: bool,
	pub visible_in_storefront: bool,
}

impl AttributePageFormData {
	pub fn initial(attribute: Option<&Attribute>) -> AttributePageFormData {
		match attribute {
			None => AttributePageFormData {
				attribute_type: AttributeType::ProductType,
				available_in_grid: true,
				entity_type: None,
				filterable_in_dashboard: true,
				filterable_in_storefront: true,
				input_type: AttributeInputType::Dropdown,
				metadata: MetadataFormData::default(),
				name: String::new(),
				slug: String::new(),
				storefront_search_position: String::new(),
				unit: None,
				value_required: true,
				visible_in_storefront: true,
			},
			Some(attribute) => AttributePageFormData {
				attribute_type: attribute.attribute_type,
				available_in_grid: attribute.available_in_grid,
				entity_type: attribute.entity_type,
				filterable_in_dashboard: attribute.filterable_in_dashboard,
				filterable_in_storefront: attribute.filterable_in_storefront,
				input_type: attribute.input_type.unwrap_or(AttributeInputType::Dropdown),
				metadata: MetadataFormData {
					metadata: attribute.metadata.clone(),
					private_metadata: attribute.private_metadata.clone(),
				},
				name: attribute.name.clone(),
				slug: attribute.slug.clone(),
				storefront_search_position: attribute.storefront_search_position.to_string(),
				unit: attribute.unit,
				value_required: attribute.value_required,
				visible_in_storefront: attribute.visible_in_storefront,
			},
		}
	}
}

/// The data a posted form started from: the attribute as it is now, except for the metadata, which is what the page showed when it was opened. A page rendered again after a failed submit keeps showing that snapshot.
pub fn posted_initial(
	attribute: Option<&Attribute>,
	pairs: &[(String, String)],
) -> AttributePageFormData {
	let mut initial = AttributePageFormData::initial(attribute);
	for section in [MetadataSection::Public, MetadataSection::Private].iter().copied() {
		let shown = form_value(pairs, initial_field_name(section))
			.and_then(|shown| parse_metadata_lines(section, shown).ok());
		if let Some(shown) = shown {
			match section {
				MetadataSection::Public => initial.metadata.metadata = shown,
				MetadataSection::Private => initial.metadata.private_metadata = shown,
			}
		}
	}
	initial
}

fn field_name(section: MetadataSection) -> &'static str {
	match section {
		MetadataSection::Public => "metadata",
		MetadataSection::Private => "private_metadata",
	}
}

fn initial_field_name(section: MetadataSection) -> &'static str {
	match section {
		MetadataSection::Public => "metadata_initial",
		MetadataSection::Private => "private_metadata_initial",
	}
}

/// Builds the mutation input. Metadata sections go out only when they were modified or the attribute is new, the type only when the attribute is new.
pub fn handle_submit(
	data: &AttributePageFormData,
	is_new: bool,
	trigger: &MetadataChangeTrigger,
) -> AttributeInput {
	AttributeInput {
		name: data.name.trim().to_owned(),
		slug: slug_or_default(&data.slug, &data.name),
		attribute_type: if is_new {
			Some(data.attribute_type)
		} else {
			None
		},
		input_type: data.input_type,
		entity_type: data
			.entity_type
			.filter(|_| data.input_type == AttributeInputType::Reference),
		value_required: data.value_required,
		visible_in_storefront: data.visible_in_storefront,
		filterable_in_storefront: data.filterable_in_storefront,
		filterable_in_dashboard: data.filterable_in_dashboard,
		available_in_grid: data.available_in_grid,
		storefront_search_position: data.storefront_search_position.trim().parse().unwrap_or(0),
		unit: data.unit.filter(|_| data.input_type == AttributeInputType::Numeric),
		metadata: trigger.select(MetadataSection::Public, is_new, &data.metadata),
		private_metadata: trigger.select(MetadataSection::Private, is_new, &data.metadata),
	}
}

/// Copies a posted attribute form into the session and validates it. Type fields are only read when the type can still change, since the page renders them disabled otherwise.
pub fn apply_form(
	session: &mut FormSession<AttributePageFormData>,
	trigger: &mut MetadataChangeTrigger,
	can_change_type: bool,
	pairs: &[(String, String)],
	messages: &Messages,
) {
	let text = |name: &str| form_value(pairs, name).unwrap_or("").to_owned();
	let checked = |name: &str| form_value(pairs, name).is_some();
	let name = text("name");
	session.change("name", |data| data.name = name);
	let slug = text("slug");
	session.change("slug", |data| data.slug = slug);
	if can_change_type {
		match AttributeInputType::parse(&text("input_type")) {
			Some(input_type) => session.change("inputType", |data| data.input_type = input_type),
			None => session.set_error(FieldError::new(
				"inputType",
				FieldErrorCode::Invalid,
				messages.format(&INVALID_CHOICE),
			)),
		}
		if let Some(attribute_type) = AttributeType::parse(&text("attribute_type")) {
			session.set(|data| data.attribute_type = attribute_type);
		}
		let entity_type = AttributeEntityType::parse(&text("entity_type"));
		session.change("entityType", |data| data.entity_type = entity_type);
	}
	let unit = MeasurementUnit::parse(&text("unit"));
	session.change("unit", |data| data.unit = unit);
	session.set(|data| {
		data.value_required = checked("value_required");
		data.visible_in_storefront = checked("visible_in_storefront");
		data.filterable_in_storefront = checked("filterable_in_storefront");
		data.filterable_in_dashboard = checked("filterable_in_dashboard");
		data.available_in_grid = checked("available_in_grid");
	});
	let position = text("storefront_search_position");
	session.change("storefrontSearchPosition", |data| {
		data.storefront_search_position = position
	});
	for section in [MetadataSection::Public, MetadataSection::Private].iter().copied() {
		match parse_metadata_lines(section, &text(field_name(section))) {
			Ok(entries) => {
				// The session starts from what the page showed, so edits made elsewhere since are not taken for the user's.
				let initial = match section {
					MetadataSection::Public => &session.initial().metadata.metadata,
					MetadataSection::Private => &session.initial().metadata.private_metadata,
				};
				trigger.observe(section, initial, &entries);
				session.change(section.field(), |data| match section {
					MetadataSection::Public => data.metadata.metadata = entries,
					MetadataSection::Private => data.metadata.private_metadata = entries,
				});
			}
			Err(error) => session.set_error(error),
		}
	}
	let data = session.data().clone();
	if data.name.trim().is_empty() {
		session.set_error(FieldError::new(
			"name",
			FieldErrorCode::Required,
			messages.format(&NAME_REQUIRED),
		));
	}
	let position = data.storefront_search_position.trim();
	if !position.is_empty() && position.parse::<i32>().is_err() {
		session.set_error(FieldError::new(
			"storefrontSearchPosition",
			FieldErrorCode::Invalid,
			messages.format(&INVALID_POSITION),
		));
	}
}

/// One page of the attribute's values. Only existing attributes have any.
pub struct ValuesProps {
	pub attribute_id: String,
	pub page_info: PageInfo,
	pub query: ListQuery,
	pub rows_number: usize,
	/// `None` while the values have not loaded.
	pub values: Option<Vec<AttributeValue>>,
}

pub struct Props {
	pub app_layout_info: AppLayoutInfo,
	/// `None` on the create page.
	pub attribute: Option<Attribute>,
	pub session: FormSession<AttributePageFormData>,
	pub value_error: Option<String>,
	pub values: Option<ValuesProps>,
}

pub fn render(props: Props, messages: &Messages) -> String {
	let Props {
		app_layout_info,
		attribute,
		session,
		value_error,
		values,
	} = props;
	let can_change_type = attribute.is_none();
	let title = match &attribute {
		Some(attribute) => attribute.name.clone(),
		None => messages.format(&CREATE_TITLE),
	};
	let data = session.data().clone();
	let error = |field: &str| session.error(field).map(|error| error.message.clone());
	let form_errors = session
		.form_errors()
		.iter()
		.map(|error| {
			html! {
				<ui::Alert level={ui::Level::Danger} title={None}>
					{error.message.clone()}
				</ui::Alert>
			}
		})
		.collect::<Vec<_>>();
	let value_forms = if data.input_type.has_dedicated_values() {
		values.as_ref().map(value_forms)
	} else {
		None
	};
	let values_card = if data.input_type.has_dedicated_values() {
		Some(html! {
			<>
				<ui::CardSpacer />
				{values_card(values, value_error, messages)}
			</>
		})
	} else {
		None
	};
	let html = html! {
		<AppLayout info={app_layout_info}>
			<ui::Form action={None} id={Some(FORM_ID.to_owned())} post={true}>
				<DetailedContent>
					<TopNav href={Some(attribute_list_url(&ListQuery::default()))} title={title} />
					<Content>
						{form_errors}
						{details_card(&data, can_change_type, &error, messages)}
						{values_card}
						<ui::CardSpacer />
						{metadata_card(&data.metadata, &session.initial().metadata, &error, messages)}
					</Content>
					<RightSidebar>
						{organization_card(&data, can_change_type, messages)}
						<ui::CardSpacer />
						{properties_card(&data, &error, messages)}
					</RightSidebar>
					<ui::Savebar
						cancel_href={attribute_list_url(&ListQuery::default())}
						disabled={session.is_save_disabled(false)}
						form={FORM_ID.to_owned()}
						labels={savebar_labels(messages)}
						show_delete={!can_change_type}
					/>
				</DetailedContent>
			</ui::Form>
			{value_forms}
		</AppLayout>
	};
	html.render_to_string()
}

/// The forms the values card submits. The card only holds buttons and inputs pointing at them.
fn value_forms(values: &ValuesProps) -> Node {
	let hidden_form = |id: String, action: &'static str, extra: Option<(&'static str, String)>| {
		html! {
			<form class="hidden-form" id={id} method="post">
				<input name="action" type="hidden" value={action} />
				{extra.map(|(name, value)| html! { <input name={name} type="hidden" value={value} /> })}
			</form>
		}
	};
	let mut forms = vec![
		hidden_form("add-value".to_owned(), "add_value", None),
		hidden_form("move-value-up".to_owned(), "move_value", Some(("offset", "-1".to_owned()))),
		hidden_form("move-value-down".to_owned(), "move_value", Some(("offset", "1".to_owned()))),
		hidden_form("delete-value".to_owned(), "delete_value", None),
		hidden_form("value-settings".to_owned(), "update_settings", None),
	];
	forms.extend(values.values.iter().flatten().map(|value| {
		hidden_form(
			format!("update-value-{}", value.id),
			"update_value",
			Some(("value_id", value.id.clone())),
		)
	}));
	html! {
		<div class="value-forms">{forms}</div>
	}
}

fn details_card(
	data: &AttributePageFormData,
	can_change_type: bool,
	error: &dyn Fn(&str) -> Option<String>,
	messages: &Messages,
) -> Node {
	let input_types = AttributeInputType::ALL
		.iter()
		.map(|input_type| ui::SelectFieldOption {
			text: input_type.label().to_owned(),
			value: input_type.as_str().to_owned(),
		})
		.collect();
	let entity_type = if data.input_type == AttributeInputType::Reference {
		let mut options = vec![ui::SelectFieldOption {
			text: messages.format(&NO_ENTITY),
			value: String::new(),
		}];
		options.extend(AttributeEntityType::ALL.iter().map(|entity_type| ui::SelectFieldOption {
			text: entity_type.label().to_owned(),
			value: entity_type.as_str().to_owned(),
		}));
		Some(html! {
			<ui::SelectField
				disabled={!can_change_type}
				error={error("entityType")}
				label={messages.format(&ENTITY_TYPE)}
				name={"entity_type".to_owned()}
				options={options}
				value={data.entity_type.map(|entity_type| entity_type.as_str().to_owned())}
			/>
		})
	} else {
		None
	};
	let unit = if data.input_type == AttributeInputType::Numeric {
		let mut options = vec![ui::SelectFieldOption {
			text: messages.format(&NO_UNIT),
			value: String::new(),
		}];
		options.extend(MeasurementUnit::ALL.iter().map(|unit| ui::SelectFieldOption {
			text: unit.label().to_owned(),
			value: unit.as_str().to_owned(),
		}));
		Some(html! {
			<ui::SelectField
				disabled={false}
				error={error("unit")}
				label={messages.format(&UNIT)}
				name={"unit".to_owned()}
				options={options}
				value={data.unit.map(|unit| unit.as_str().to_owned())}
			/>
		})
	} else {
		None
	};
	html! {
		<ui::Card title={Some(messages.format(&GENERAL_INFORMATION))}>
			<ui::TextField
				disabled={false}
				error={error("name")}
				help_text={None}
				label={messages.format(&NAME)}
				name={"name".to_owned()}
				placeholder={None}
				value={data.name.clone()}
			/>
			<ui::TextField
				disabled={false}
				error={error("slug")}
				help_text={Some(messages.format(&SLUG_HELP))}
				label={messages.format(&SLUG)}
				name={"slug".to_owned()}
				placeholder={Some(slugify(&data.name))}
				value={data.slug.clone()}
			/>
			<ui::SelectField
				disabled={!can_change_type}
				error={error("inputType")}
				label={messages.format(&INPUT_TYPE)}
				name={"input_type".to_owned()}
				options={input_types}
				value={Some(data.input_type.as_str().to_owned())}
			/>
			{entity_type}
			{unit}
			<ui::CheckboxField
				checked={data.value_required}
				disabled={false}
				help_text={None}
				label={messages.format(&VALUE_REQUIRED)}
				name={"value_required".to_owned()}
			/>
		</ui::Card>
	}
}

/// The values table. Its buttons and inputs belong to the small forms rendered after the attribute form, since forms cannot nest.
fn values_card(values: Option<ValuesProps>, value_error: Option<String>, messages: &Messages) -> Node {
	let ValuesProps {
		attribute_id,
		page_info,
		query,
		rows_number,
		values,
	} = match values {
		Some(values) => values,
		None => {
			return html! {
				<ui::Card title={Some(messages.format(&VALUES))}>
					<ui::P>{messages.format(&SAVE_VALUE_FIRST)}</ui::P>
				</ui::Card>
			}
		}
	};
	let button = |form: String, name: Option<&str>, value: Option<String>, label: String| {
		html! {
			<button class="button button-small" form={form} name={name.map(ToOwned::to_owned)} type="submit" value={value}>
				{label}
			</button>
		}
	};
	let rows = render_collection(
		values.as_deref(),
		|value| {
			let key = value.map_or("skeleton", |value| value.id()).to_owned();
			let cells = match value {
				Some(value) => {
					let rename_form = format!("update-value-{}", value.id);
					html! {
						<>
							<ui::TableCell class={Some("attribute-values-move".to_owned())} col_span={None} color={None} column={None} text_align={None}>
								{button("move-value-up".to_owned(), Some("value_id"), Some(value.id.clone()), messages.format(&MOVE_UP))}
								{button("move-value-down".to_owned(), Some("value_id"), Some(value.id.clone()), messages.format(&MOVE_DOWN))}
							</ui::TableCell>
							<ui::TableCell class={None} col_span={None} color={None} column={None} text_align={None}>
								{value.slug.clone()}
							</ui::TableCell>
							<ui::TableCell class={None} col_span={None} color={None} column={None} text_align={None}>
								<input
									aria-label={messages.format(&VALUE_NAME)}
									class="form-text-field"
									form={rename_form.clone()}
									name="name"
									value={value.name.clone()}
								/>
								{button(rename_form, None, None, messages.format(&RENAME_VALUE))}
							</ui::TableCell>
							<ui::TableCell class={Some("attribute-values-delete".to_owned())} col_span={None} color={None} column={None} text_align={Some(ui::TextAlign::Right)}>
								{button("delete-value".to_owned(), Some("value_id"), Some(value.id.clone()), messages.format(&DELETE_VALUE))}
							</ui::TableCell>
						</>
					}
				}
				None => html! {
					<>
						<ui::TableCell class={None} col_span={None} color={None} column={None} text_align={None}><ui::Skeleton /></ui::TableCell>
						<ui::TableCell class={None} col_span={None} color={None} column={None} text_align={None}><ui::Skeleton /></ui::TableCell>
						<ui::TableCell class={None} col_span={None} color={None} column={None} text_align={None}><ui::Skeleton /></ui::TableCell>
						<ui::TableCell class={None} col_span={None} color={None} column={None} text_align={None}><ui::Skeleton /></ui::TableCell>
					</>
				},
			};
			html! {
				<ui::TableRow color={None} href={None} key={Some(key)} selected={None}>
					{cells}
				</ui::TableRow>
			}
		},
		|| {
			html! {
				<ui::TableRow color={None} href={None} key={Some("empty".to_owned())} selected={None}>
					<ui::TableCell class={None} col_span={Some(4)} color={None} column={None} text_align={None}>
						{messages.format(&NO_VALUES)}
					</ui::TableCell>
				</ui::TableRow>
			}
		},
	);
	let page_href = |request| attribute_values_url(&attribute_id, &query.with_page(request));
	let labels = pagination_labels(messages);
	let rows_options = ROWS_NUMBER_CHOICES
		.iter()
		.map(|choice| {
			html! {
				<option selected={*choice == rows_number} value={choice.to_string()}>
					{choice.to_string()}
				</option>
			}
		})
		.collect::<Vec<_>>();
	let page_link = |href: Option<String>, label: String, direction: &'static str| match href {
		Some(href) => html! {
			<a class="table-pagination-arrow" data-test-id={direction} href={href}>{label}</a>
		},
		None => html! {
			<span class="table-pagination-arrow table-pagination-arrow-disabled">{label}</span>
		},
	};
	html! {
		<ui::Card title={Some(messages.format(&VALUES))}>
			<div class="attribute-values-add">
				<input
					aria-label={messages.format(&NEW_VALUE)}
					class="form-text-field"
					form="add-value"
					name="value"
					placeholder={messages.format(&NEW_VALUE)}
				/>
				{button("add-value".to_owned(), None, None, messages.format(&ASSIGN_VALUE))}
				<ui::FieldError error={value_error} />
			</div>
			<ui::Table layout={None} width={Some("100%".to_owned())}>
				<ui::TableHeader>
					<ui::TableRow color={None} href={None} key={None} selected={None}>
						<ui::TableHeaderCell arrow={None} class={Some("attribute-values-move".to_owned())} col_span={None} column={None} href={None} text_align={None} />
						<ui::TableHeaderCell arrow={None} class={None} col_span={None} column={None} href={None} text_align={None}>
							{messages.format(&VALUE_ADMIN)}
						</ui::TableHeaderCell>
						<ui::TableHeaderCell arrow={None} class={None} col_span={None} column={None} href={None} text_align={None}>
							{messages.format(&VALUE_NAME)}
						</ui::TableHeaderCell>
						<ui::TableHeaderCell arrow={None} class={Some("attribute-values-delete".to_owned())} col_span={None} column={None} href={None} text_align={None} />
					</ui::TableRow>
				</ui::TableHeader>
				<ui::TableFooter>
					<tr class="table-row">
						<td class="table-cell" colspan="4">
							<div class="table-pagination">
								<label class="table-pagination-rows-label">
									{labels.rows}
									<select form="value-settings" name="rows_number">{rows_options}</select>
								</label>
								<button class="table-pagination-rows-apply" form="value-settings" type="submit">{"↵"}</button>
								<div class="table-pagination-arrows">
									{page_link(page_info.request_previous().map(&page_href), labels.previous, "previous")}
									{page_link(page_info.request_next().map(&page_href), labels.next, "next")}
								</div>
							</div>
						</td>
					</tr>
				</ui::TableFooter>
				<ui::TableBody>{rows}</ui::TableBody>
			</ui::Table>
		</ui::Card>
	}
}

fn metadata_card(
	data: &MetadataFormData,
	initial: &MetadataFormData,
	error: &dyn Fn(&str) -> Option<String>,
	messages: &Messages,
) -> Node {
	html! {
		<ui::Card title={Some(messages.format(&METADATA))}>
			<input name={initial_field_name(MetadataSection::Public)} type="hidden" value={format_metadata_lines(&initial.metadata)} />
			<input
				name={initial_field_name(MetadataSection::Private)}
				type="hidden"
				value={format_metadata_lines(&initial.private_metadata)}
			/>
			<ui::TextArea
				disabled={false}
				error={error(MetadataSection::Public.field())}
				label={messages.format(&METADATA)}
				name={"metadata".to_owned()}
				placeholder={Some(messages.format(&METADATA_PLACEHOLDER))}
				rows={4}
				value={format_metadata_lines(&data.metadata)}
			/>
			<ui::TextArea
				disabled={false}
				error={error(MetadataSection::Private.field())}
				label={messages.format(&PRIVATE_METADATA)}
				name={"private_metadata".to_owned()}
				placeholder={Some(messages.format(&METADATA_PLACEHOLDER))}
				rows={4}
				value={format_metadata_lines(&data.private_metadata)}
			/>
		</ui::Card>
	}
}

fn organization_card(data: &AttributePageFormData, can_change_type: bool, messages: &Messages) -> Node {
	let options = AttributeType::ALL
		.iter()
		.map(|attribute_type| ui::SelectFieldOption {
			text: attribute_type.label().to_owned(),
			value: attribute_type.as_str().to_owned(),
		})
		.collect();
	html! {
		<ui::Card title={Some(messages.format(&ORGANIZATION))}>
			<ui::SelectField
				disabled={!can_change_type}
				error={None}
				label={messages.format(&ATTRIBUTE_CLASS)}
				name={"attribute_type".to_owned()}
				options={options}
				value={Some(data.attribute_type.as_str().to_owned())}
			/>
		</ui::Card>
	}
}

fn properties_card(
	data: &AttributePageFormData,
	error: &dyn Fn(&str) -> Option<String>,
	messages: &Messages,
) -> Node {
	let checkbox = |checked: bool, label: &MessageDescriptor, name: &str| {
		html! {
			<ui::CheckboxField
				checked={checked}
				disabled={false}
				help_text={None}
				label={messages.format(label)}
				name={name.to_owned()}
			/>
		}
	};
	html! {
		<ui::Card title={Some(messages.format(&PROPERTIES))}>
			<ui::H2 center={None}>{messages.format(&STOREFRONT_PROPERTIES)}</ui::H2>
			{checkbox(data.visible_in_storefront, &VISIBLE_IN_STOREFRONT, "visible_in_storefront")}
			{checkbox(data.filterable_in_storefront, &FILTERABLE_IN_STOREFRONT, "filterable_in_storefront")}
			<ui::TextField
				disabled={false}
				error={error("storefrontSearchPosition")}
				help_text={None}
				label={messages.format(&STOREFRONT_SEARCH_POSITION)}
				name={"storefront_search_position".to_owned()}
				placeholder={None}
				value={data.storefront_search_position.clone()}
			/>
			<ui::H2 center={None}>{messages.format(&DASHBOARD_PROPERTIES)}</ui::H2>
			{checkbox(data.filterable_in_dashboard, &FILTERABLE_IN_DASHBOARD, "filterable_in_dashboard")}
			{checkbox(data.available_in_grid, &AVAILABLE_IN_GRID, "available_in_grid")}
		</ui::Card>
	}
}

#[cfg(test)]
use bazaar_app_common::form::metadata::MetadataInput;

#[cfg(test)]
fn existing() -> Attribute {
	Attribute {
		id: "QXR0cmlidXRlOjE".to_owned(),
		name: "Color".to_owned(),
		slug: "color".to_owned(),
		attribute_type: AttributeType::ProductType,
		input_type: None,
		entity_type: Some(AttributeEntityType::Page),
		value_required: false,
		visible_in_storefront: true,
		filterable_in_storefront: false,
		filterable_in_dashboard: true,
		available_in_grid: true,
		storefront_search_position: 3,
		unit: None,
		metadata: vec![MetadataInput {
			key: "source".to_owned(),
			value: "import".to_owned(),
		}],
		private_metadata: Vec::new(),
	}
}

#[cfg(test)]
fn pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
	pairs
		.iter()
		.map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
		.collect()
}

#[test]
fn test_initial() {
	let data = AttributePageFormData::initial(None);
	assert_eq!(data.input_type, AttributeInputType::Dropdown);
	assert_eq!(data.attribute_type, AttributeType::ProductType);
	assert!(data.value_required && data.visible_in_storefront);
	assert!(data.filterable_in_storefront && data.filterable_in_dashboard);
	let data = AttributePageFormData::initial(Some(&existing()));
	assert_eq!(data.input_type, AttributeInputType::Dropdown);
	assert_eq!(data.storefront_search_position, "3");
	assert_eq!(data.metadata.metadata.len(), 1);
}

#[test]
fn test_slug_defaults_to_name() {
	let mut data = AttributePageFormData::initial(None);
	data.name = "Red T-Shirt".to_owned();
	let input = handle_submit(&data, true, &MetadataChangeTrigger::default());
	assert_eq!(input.slug, "red-t-shirt");
	data.slug = "   ".to_owned();
	let input = handle_submit(&data, true, &MetadataChangeTrigger::default());
	assert_eq!(input.slug, "red-t-shirt");
	data.slug = "custom-slug".to_owned();
	let input = handle_submit(&data, true, &MetadataChangeTrigger::default());
	assert_eq!(input.slug, "custom-slug");
}

#[test]
fn test_posted_initial_keeps_shown_metadata() {
	let attribute = existing();
	let form = pairs(&[("metadata_initial", ""), ("private_metadata_initial", "secret: 1")]);
	let initial = posted_initial(Some(&attribute), &form);
	assert!(initial.metadata.metadata.is_empty());
	assert_eq!(initial.metadata.private_metadata.len(), 1);
	assert_eq!(initial.name, "Color");
	let initial = posted_initial(Some(&attribute), &pairs(&[("metadata_initial", "no separator")]));
	assert_eq!(initial.metadata.metadata, attribute.metadata);
	let mut session = FormSession::new(posted_initial(Some(&attribute), &form));
	let mut trigger = MetadataChangeTrigger::default();
	let form = pairs(&[
		("name", "Color"),
		("metadata", ""),
		("metadata_initial", ""),
		("private_metadata", "secret: 1"),
		("private_metadata_initial", "secret: 1"),
	]);
	apply_form(&mut session, &mut trigger, false, &form, &Messages::default());
	assert!(!trigger.is_metadata_modified());
	assert!(!trigger.is_private_metadata_modified());
	let html = render(
		Props {
			app_layout_info: bazaar_app_layouts::app_layout::get_app_layout_info(
				&Messages::default(),
				bazaar_app_layouts::app_layout::Section::Attributes,
				"Color".to_owned(),
				None,
			),
			attribute: Some(attribute),
			session,
			value_error: None,
			values: None,
		},
		&Messages::default(),
	);
	assert!(html.contains(r#"name="metadata_initial" type="hidden" value="""#));
	assert!(html.contains(r#"name="private_metadata_initial" type="hidden" value="secret: 1""#));
}

#[test]
fn test_metadata_and_type_in_payload() {
	let data = AttributePageFormData::initial(None);
	let input = handle_submit(&data, true, &MetadataChangeTrigger::default());
	assert_eq!(input.metadata, Some(Vec::new()));
	assert_eq!(input.private_metadata, Some(Vec::new()));
	assert_eq!(input.attribute_type, Some(AttributeType::ProductType));
	let data = AttributePageFormData::initial(Some(&existing()));
	let input = handle_submit(&data, false, &MetadataChangeTrigger::default());
	assert_eq!(input.metadata, None);
	assert_eq!(input.private_metadata, None);
	assert_eq!(input.attribute_type, None);
	assert_eq!(input.storefront_search_position, 3);
}

#[test]
fn test_apply_form() {
	let attribute = existing();
	let messages = Messages::default();
	let mut session = FormSession::new(AttributePageFormData::initial(Some(&attribute)));
	let mut trigger = MetadataChangeTrigger::default();
	let form = pairs(&[
		("action", "submit"),
		("name", "Colour"),
		("slug", ""),
		("input_type", "NUMERIC"),
		("visible_in_storefront", "true"),
		("storefront_search_position", "5"),
		("metadata", "source: import"),
		("private_metadata", "secret: 1"),
	]);
	apply_form(&mut session, &mut trigger, false, &form, &messages);
	assert!(session.errors().is_empty());
	let data = session.data();
	// The type of an existing attribute is not read from the form.
	assert_eq!(data.input_type, AttributeInputType::Dropdown);
	assert_eq!(data.entity_type, Some(AttributeEntityType::Page));
	assert!(!data.filterable_in_dashboard);
	assert!(!trigger.is_metadata_modified());
	assert!(trigger.is_private_metadata_modified());
	let input = session.submit(|data| handle_submit(data, false, &trigger)).unwrap();
	assert_eq!(input.slug, "colour");
	assert_eq!(input.metadata, None);
	assert_eq!(input.private_metadata.map(|entries| entries.len()), Some(1));
}

#[test]
fn test_apply_form_errors() {
	let messages = Messages::default();
	let mut session = FormSession::new(AttributePageFormData::initial(None));
	let mut trigger = MetadataChangeTrigger::default();
	let form = pairs(&[
		("name", " "),
		("input_type", "DROPDOWN"),
		("storefront_search_position", "first"),
		("metadata", "no separator"),
	]);
	apply_form(&mut session, &mut trigger, true, &form, &messages);
	assert_eq!(session.error("name").map(|error| error.code), Some(FieldErrorCode::Required));
	assert!(session.error("storefrontSearchPosition").is_some());
	assert!(session.error("metadata").is_some());
	assert!(session.submit(|_| ()).is_err());
}

#[test]
fn test_render_new_attribute() {
	let session = FormSession::new(AttributePageFormData::initial(None));
	let props = Props {
		app_layout_info: bazaar_app_layouts::app_layout::get_app_layout_info(
			&Messages::default(),
			bazaar_app_layouts::app_layout::Section::Attributes,
			"Create New Attribute".to_owned(),
			None,
		),
		attribute: None,
		session,
		value_error: None,
		values: None,
	};
	let html = render(props, &Messages::default());
	assert!(html.contains("Values can be added once the attribute is saved"));
	assert!(!html.contains("savebar-delete"));
	assert!(!html.contains("id=\"add-value\""));
}
