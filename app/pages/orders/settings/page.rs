use crate::helpers::savebar_labels;
use bazaar_app_common::{
	messages::{MessageDescriptor, Messages},
	orders::OrderSettings,
	urls::{order_list_url, OrderListQuery},
};
use bazaar_app_layouts::{
	app_layout::{AppLayout, AppLayoutInfo},
	detailed_content::{Content, DetailedContent, TopNav},
};
use bazaar_ui as ui;
use html::html;

pub const TITLE: MessageDescriptor =
	MessageDescriptor::described("Vu9cN2", "Order settings", "header");
const FULFILLMENT: MessageDescriptor =
	MessageDescriptor::described("vp3vpv", "Settings", "section header");
const AUTOMATICALLY_CONFIRM: MessageDescriptor = MessageDescriptor::described(
	"7rHw4T",
	"Automatically confirm all new orders",
	"checkbox label",
);
const AUTOMATICALLY_FULFILL: MessageDescriptor = MessageDescriptor::described(
	"bpM6t9",
	"Automatically fulfill non shippable gift cards",
	"checkbox label",
);

pub struct Props {
	pub app_layout_info: AppLayoutInfo,
	pub settings: OrderSettings,
}

pub fn render(props: Props, messages: &Messages) -> String {
	let Props {
		app_layout_info,
		settings,
	} = props;
	let back = order_list_url(&OrderListQuery::default());
	let html = html! {
		<AppLayout info={app_layout_info}>
			<DetailedContent>
				<TopNav href={Some(back.clone())} title={messages.format(&TITLE)} />
				<Content>
					<ui::Card title={Some(messages.format(&FULFILLMENT))}>
						<ui::Form action={None} id={Some("order-settings-form".to_owned())} post={true}>
							<ui::CheckboxField
								checked={settings.automatically_confirm_all_new_orders}
								disabled={false}
								help_text={None}
								label={messages.format(&AUTOMATICALLY_CONFIRM)}
								name={"automatically_confirm_all_new_orders".to_owned()}
							/>
							<ui::CheckboxField
								checked={settings.automatically_fulfill_non_shippable_gift_card}
								disabled={false}
								help_text={None}
								label={messages.format(&AUTOMATICALLY_FULFILL)}
								name={"automatically_fulfill_non_shippable_gift_card".to_owned()}
							/>
						</ui::Form>
					</ui::Card>
				</Content>
				<ui::Savebar
					cancel_href={back}
					disabled={false}
					form={"order-settings-form".to_owned()}
					labels={savebar_labels(messages)}
					show_delete={false}
				/>
			</DetailedContent>
		</AppLayout>
	};
	html.render_to_string()
}
