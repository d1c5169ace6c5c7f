use crate::{messages::MessageDescriptor, money::MoneyRange};
use bazaar_deps::chrono::NaiveDate;
use bazaar_ui as ui;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
	pub id: String,
	pub name: String,
	pub currency_code: String,
}

/// How a product is offered in one channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelListing {
	pub channel: Channel,
	pub is_published: bool,
	pub publication_date: Option<NaiveDate>,
	pub price_range: Option<MoneyRange>,
}

const PUBLISHED: MessageDescriptor =
	MessageDescriptor::described("u3KDhM", "Published", "product status");
const SCHEDULED_TO_PUBLISH: MessageDescriptor = MessageDescriptor::described(
	"bWfzME",
	"Scheduled to publish",
	"product status",
);
const UNPUBLISHED: MessageDescriptor =
	MessageDescriptor::described("Z6sgJK", "Unpublished", "product status");

pub fn channel_availability_label(listing: &ChannelListing) -> &'static MessageDescriptor {
	if listing.is_published {
		&PUBLISHED
	} else if listing.publication_date.is_some() {
		&SCHEDULED_TO_PUBLISH
	} else {
		&UNPUBLISHED
	}
}

pub fn channel_availability_color(listing: &ChannelListing) -> ui::PillColor {
	if listing.is_published {
		ui::PillColor::Success
	} else if listing.publication_date.is_some() {
		ui::PillColor::Warning
	} else {
		ui::PillColor::Error
	}
}

#[test]
fn test_channel_availability() {
	let mut listing = ChannelListing {
		channel: Channel {
			id: "Q2hhbm5lbDox".to_owned(),
			name: "Default".to_owned(),
			currency_code: "USD".to_owned(),
		},
		is_published: true,
		publication_date: None,
		price_range: None,
	};
	assert_eq!(channel_availability_label(&listing).default_message, "Published");
	assert_eq!(channel_availability_color(&listing), ui::PillColor::Success);
	listing.is_published = false;
	listing.publication_date = NaiveDate::from_ymd_opt(2030, 1, 1);
	assert_eq!(
		channel_availability_label(&listing).default_message,
		"Scheduled to publish"
	);
	assert_eq!(channel_availability_color(&listing), ui::PillColor::Warning);
	listing.publication_date = None;
	assert_eq!(channel_availability_color(&listing), ui::PillColor::Error);
}
