use super::order_list::{order_list, OrderListProps};
use bazaar_app_common::{
	limits::{has_limits, is_limit_reached, LimitKind, Limits},
	messages::{MessageDescriptor, Messages},
	orders::SavedTab,
	urls::{order_list_url, ListQuery, OrderListQuery},
};
use bazaar_app_layouts::{
	app_layout::{AppLayout, AppLayoutInfo},
	detailed_content::TopNav,
};
use bazaar_deps::serde_urlencoded;
use bazaar_ui as ui;
use html::html;

pub const TITLE: MessageDescriptor = MessageDescriptor::described("zzWqsg", "Orders", "page header");
const SETTINGS: MessageDescriptor =
	MessageDescriptor::described("WbV1Xm", "Order Settings", "button");
const CREATE_ORDER: MessageDescriptor = MessageDescriptor::described("LshEVn", "Create order", "button");
const LIMITS: MessageDescriptor =
	MessageDescriptor::described("zyceue", "{count}/{max} orders", "placed order counter");
const LIMIT_REACHED_TITLE: MessageDescriptor =
	MessageDescriptor::described("+7X7SR", "Order limit reached", "alert");
const LIMIT_REACHED: MessageDescriptor = MessageDescriptor::new(
	"Ycb+ZA",
	"You have reached your order limit, you will be billed extra for orders above limit. If you would like to up your limit, contact your administration staff about raising your limits.",
);
const ALL_ORDERS: MessageDescriptor =
	MessageDescriptor::described("WRkCFt", "All Orders", "tab name");
const SEARCH: MessageDescriptor = MessageDescriptor::new("wTHjt3", "Search Orders...");
const APPLY: MessageDescriptor = MessageDescriptor::new("5kQPEE", "Apply");
const SAVE_SEARCH: MessageDescriptor = MessageDescriptor::described("ZUdHxS", "Save search", "button");
const TAB_NAME: MessageDescriptor = MessageDescriptor::described("HgLsEv", "Search name", "save search");
const DELETE_SEARCH: MessageDescriptor =
	MessageDescriptor::described("Hbh9sx", "Delete search", "button");

pub struct Props {
	pub app_layout_info: AppLayoutInfo,
	pub limits: Limits,
	pub list: OrderListProps,
	pub tabs: Vec<SavedTab>,
}

pub fn render(props: Props, messages: &Messages) -> String {
	let Props {
		app_layout_info,
		limits,
		list,
		tabs,
	} = props;
	let limit_reached = is_limit_reached(&limits, LimitKind::Orders);
	let limits_info = if has_limits(&limits, LimitKind::Orders) {
		let count = limits.current_usage.orders.unwrap_or(0).to_string();
		let max = limits.allowed_usage.orders.unwrap_or(0).to_string();
		Some(html! {
			<span class="limits-info">
				{messages.format_with(&LIMITS, &[("count", count), ("max", max)])}
			</span>
		})
	} else {
		None
	};
	let limit_alert = if limit_reached {
		Some(html! {
			<ui::Alert level={ui::Level::Warning} title={Some(messages.format(&LIMIT_REACHED_TITLE))}>
				{messages.format(&LIMIT_REACHED)}
			</ui::Alert>
		})
	} else {
		None
	};
	let settings_menu = vec![ui::CardMenuItem {
		action: "open_settings".to_owned(),
		label: messages.format(&SETTINGS),
		test_id: Some("order-settings".to_owned()),
	}];
	let filter_bar = filter_bar(&list.query, &tabs, messages);
	let html = html! {
		<AppLayout info={app_layout_info}>
			<ui::S1>
				<TopNav href={None} title={messages.format(&TITLE)}>
					<ui::CardMenu items={settings_menu} />
					<div class="order-list-create">
						<form method="post">
							<ui::Button
								button_type={ui::ButtonType::Submit}
								color={None}
								disabled={Some(limit_reached)}
								form={None}
								href={None}
								id={Some("create-order-button".to_owned())}
								name={Some("action".to_owned())}
								value={Some("create_order".to_owned())}
							>
								{messages.format(&CREATE_ORDER)}
							</ui::Button>
						</form>
						{limits_info}
					</div>
				</TopNav>
				{limit_alert}
				<ui::Card title={None}>
					{filter_bar}
					{order_list(list, messages)}
				</ui::Card>
			</ui::S1>
		</AppLayout>
	};
	html.render_to_string()
}

/// The link a saved tab opens: the search it was saved with, marked as that tab.
pub fn saved_tab_url(tab: usize, saved: &SavedTab) -> String {
	let list: ListQuery = serde_urlencoded::from_str(&saved.query).unwrap_or_default();
	order_list_url(&OrderListQuery {
		list,
		tab: Some(tab),
	})
}

/// Tabs for "All Orders" and each saved search, then the search form and the forms that save or delete a search.
fn filter_bar(query: &OrderListQuery, tabs: &[SavedTab], messages: &Messages) -> html::Node {
	let mut tab_links = vec![html! {
		<ui::TabLink href={order_list_url(&OrderListQuery::default())} selected={query.tab.is_none()}>
			{messages.format(&ALL_ORDERS)}
		</ui::TabLink>
	}];
	tab_links.extend(tabs.iter().enumerate().map(|(index, saved)| {
		let tab = index + 1;
		html! {
			<ui::TabLink href={saved_tab_url(tab, saved)} selected={query.tab == Some(tab)}>
				{saved.name.clone()}
			</ui::TabLink>
		}
	}));
	let hidden = |name: &'static str, value: Option<String>| {
		value.map(|value| html! { <input name={name} type="hidden" value={value} /> })
	};
	let delete_tab = query.tab.map(|tab| {
		html! {
			<form class="filter-bar-delete-tab" method="post">
				<input name="tab" type="hidden" value={tab.to_string()} />
				<ui::Button
					button_type={ui::ButtonType::Submit}
					color={Some("var(--red)".to_owned())}
					disabled={None}
					form={None}
					href={None}
					id={None}
					name={Some("action".to_owned())}
					value={Some("delete_tab".to_owned())}
				>
					{messages.format(&DELETE_SEARCH)}
				</ui::Button>
			</form>
		}
	});
	let save_tab = if query.tab.is_none() {
		Some(html! {
			<details class="filter-bar-save-tab">
				<summary class="button">{messages.format(&SAVE_SEARCH)}</summary>
				<form method="post">
					<input name="action" type="hidden" value="save_tab" />
					<ui::TextField
						disabled={false}
						error={None}
						help_text={None}
						label={messages.format(&TAB_NAME)}
						name={"name".to_owned()}
						placeholder={None}
						value={String::new()}
					/>
					<ui::Button
						button_type={ui::ButtonType::Submit}
						color={None}
						disabled={None}
						form={None}
						href={None}
						id={None}
						name={None}
						value={None}
					>
						{messages.format(&SAVE_SEARCH)}
					</ui::Button>
				</form>
			</details>
		})
	} else {
		None
	};
	html! {
		<div class="filter-bar-wrapper">
			<ui::TabBar>{tab_links}</ui::TabBar>
			<div class="filter-bar-actions">
				<form class="filter-bar" method="get">
					{hidden("sort", query.list.sort.clone())}
					{hidden("asc", query.list.asc.map(|asc| asc.to_string()))}
					<input
						aria-label={messages.format(&SEARCH)}
						class="filter-bar-search"
						name="query"
						placeholder={messages.format(&SEARCH)}
						type="search"
						value={query.list.query.clone()}
					/>
					<ui::Button
						button_type={ui::ButtonType::Submit}
						color={None}
						disabled={None}
						form={None}
						href={None}
						id={None}
						name={None}
						value={None}
					>
						{messages.format(&APPLY)}
					</ui::Button>
				</form>
				{save_tab}
				{delete_tab}
			</div>
		</div>
	}
}

#[test]
fn test_saved_tab_url() {
	let saved = SavedTab {
		name: "Unpaid".to_owned(),
		query: "sort=payment&query=smith".to_owned(),
	};
	assert_eq!(saved_tab_url(2, &saved), "/orders/?sort=payment&query=smith&tab=2");
	let broken = SavedTab {
		name: "Broken".to_owned(),
		query: "asc=maybe".to_owned(),
	};
	assert_eq!(saved_tab_url(1, &broken), "/orders/?tab=1");
}
