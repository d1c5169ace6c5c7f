use crate::{
	demo_banner::{DemoBanner, DemoBannerInfo},
	document::Document,
};
use bazaar_app_common::messages::{MessageDescriptor, Messages};
use bazaar_ui as ui;
use html::{component, html};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
	Products,
	Orders,
	Attributes,
}

impl Section {
	const ALL: [Section; 3] = [Section::Products, Section::Orders, Section::Attributes];

	fn href(self) -> &'static str {
		match self {
			Section::Products => "/products/",
			Section::Orders => "/orders/",
			Section::Attributes => "/attributes/",
		}
	}

	pub fn name(self) -> MessageDescriptor {
		match self {
			Section::Products => MessageDescriptor::described("7NFfmz", "Products", "section name"),
			Section::Orders => MessageDescriptor::described("X7jl6w", "Orders", "section name"),
			Section::Attributes => {
				MessageDescriptor::described("+xTpT1", "Attributes", "section name")
			}
		}
	}
}

pub struct AppLayoutInfo {
	pub title: String,
	pub section: Section,
	pub nav: Vec<(Section, String)>,
	pub demo_banner: Option<DemoBannerInfo>,
}

/// Everything the layout shows, resolved against the message catalog. The demo banner is only built for demo deployments.
pub fn get_app_layout_info(
	messages: &Messages,
	section: Section,
	title: String,
	demo_banner: Option<(String, String)>,
) -> AppLayoutInfo {
	let nav = Section::ALL
		.iter()
		.map(|section| (*section, messages.format(&section.name())))
		.collect();
	let demo_banner = demo_banner.map(|(storefront_url, graphql_url)| {
		DemoBannerInfo::new(messages, storefront_url, graphql_url)
	});
	AppLayoutInfo {
		title,
		section,
		nav,
		demo_banner,
	}
}

#[component]
pub fn AppLayout(info: AppLayoutInfo) {
	let selected = info.section;
	let nav = info
		.nav
		.into_iter()
		.map(|(section, name)| {
			html! {
				<ui::SideNavItem href={section.href().to_owned()} selected={section == selected}>
					{name}
				</ui::SideNavItem>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<Document title={info.title}>
			{info.demo_banner.map(|demo_banner| html! {
				<DemoBanner info={demo_banner} />
			})}
			<div class="app-layout">
				<ui::SideNav>{nav}</ui::SideNav>
				<main class="app-layout-content">{children}</main>
			</div>
		</Document>
	}
}

#[test]
fn test_app_layout() {
	let info = get_app_layout_info(&Messages::default(), Section::Orders, "Orders".to_owned(), None);
	let html = html! {
		<AppLayout info={info}>
			<p>{"content"}</p>
		</AppLayout>
	}
	.render_to_string();
	assert!(html.contains(
		r#"<a class="side-nav-item side-nav-item-selected" href="/orders/">Orders</a>"#
	));
	assert!(html.contains(r#"<a class="side-nav-item" href="/products/">Products</a>"#));
	assert!(!html.contains("demo-banner"));
	assert!(html.contains("<title>Orders</title>"));
}
