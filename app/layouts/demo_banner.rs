use bazaar_app_common::messages::{MessageDescriptor, MessageSegment, Messages};
use bazaar_ui as ui;
use html::{component, html, Node};

const SEE_DEMO_STOREFRONT: MessageDescriptor =
	MessageDescriptor::new("4gZl/n", "See <emphasis>DEMO STOREFRONT</emphasis>");
const STOREFRONT: MessageDescriptor = MessageDescriptor::new("LmKz3g", "Storefront");
const PLAY_WITH_GRAPHQL: MessageDescriptor =
	MessageDescriptor::new("/X8Mjx", "Play with <emphasis>GraphQL API</emphasis>");
const API: MessageDescriptor = MessageDescriptor::new("xwEc8K", "API");

pub const GITHUB_URL: &str = "https://github.com/saleor/saleor";

/// The banner shown above every page of a demo deployment. Its text is resolved when it is built.
pub struct DemoBannerInfo {
	pub storefront_url: String,
	pub graphql_url: String,
	pub storefront_wide: Vec<MessageSegment>,
	pub storefront_narrow: String,
	pub graphql_wide: Vec<MessageSegment>,
	pub graphql_narrow: String,
}

impl DemoBannerInfo {
	pub fn new(messages: &Messages, storefront_url: String, graphql_url: String) -> DemoBannerInfo {
		DemoBannerInfo {
			storefront_url,
			graphql_url,
			storefront_wide: messages.format_rich(&SEE_DEMO_STOREFRONT, &[]),
			storefront_narrow: messages.format(&STOREFRONT),
			graphql_wide: messages.format_rich(&PLAY_WITH_GRAPHQL, &[]),
			graphql_narrow: messages.format(&API),
		}
	}
}

fn render_segments(segments: Vec<MessageSegment>) -> Vec<Node> {
	segments
		.into_iter()
		.map(|segment| match segment {
			MessageSegment::Text(text) => html! { <>{text}</> },
			MessageSegment::Tag { tag, text } if tag == "emphasis" => html! {
				<em class="demo-banner-emphasis">{text}</em>
			},
			MessageSegment::Tag { text, .. } => html! { <>{text}</> },
		})
		.collect()
}

/// Wide screens show the full sentences, narrow screens the short labels. The stylesheet hides one of the two by breakpoint.
#[component]
pub fn DemoBanner(info: DemoBannerInfo) {
	html! {
		<div class="demo-banner">
			<div class="demo-banner-bordered">
				<div />
				<div class="demo-banner-links">
					<ui::ExternalLink class_name={Some("demo-banner-link".to_owned())} href={info.storefront_url}>
						<span class="md-up">{render_segments(info.storefront_wide)}</span>
						<span class="md-down demo-banner-emphasis">{info.storefront_narrow}</span>
					</ui::ExternalLink>
					<div class="demo-banner-divider md-up" />
					<ui::ExternalLink class_name={Some("demo-banner-link".to_owned())} href={info.graphql_url}>
						<span class="md-up">{render_segments(info.graphql_wide)}</span>
						<span class="md-down demo-banner-emphasis">{info.graphql_narrow}</span>
					</ui::ExternalLink>
					<div class="demo-banner-github">
						<ui::ExternalLink class_name={Some("github-button".to_owned())} href={GITHUB_URL.to_owned()}>
							<span aria-label="Star saleor/saleor on GitHub">{"Star us on GitHub"}</span>
						</ui::ExternalLink>
					</div>
				</div>
			</div>
		</div>
	}
}

#[test]
fn test_demo_banner() {
	let info = DemoBannerInfo::new(
		&Messages::default(),
		"https://demo.example.com/".to_owned(),
		"https://demo.example.com/graphql/".to_owned(),
	);
	let html = html!(<DemoBanner info={info} />).render_to_string();
	assert!(html.contains(r#"See <em class="demo-banner-emphasis">DEMO STOREFRONT</em>"#));
	assert!(html.contains(r#"Play with <em class="demo-banner-emphasis">GraphQL API</em>"#));
	assert!(html.contains(r#"<span class="md-down demo-banner-emphasis">API</span>"#));
	assert!(html.contains(r#"href="https://github.com/saleor/saleor""#));
	assert!(html.contains(r#"rel="noopener noreferrer""#));
}
