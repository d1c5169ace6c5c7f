use crate::{
	list::{rows::Entity, sort::SortField},
	messages::MessageDescriptor,
	money::Money,
};
use bazaar_deps::chrono::{DateTime, Utc};
use bazaar_ui as ui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
	Draft,
	Unconfirmed,
	Unfulfilled,
	PartiallyFulfilled,
	Fulfilled,
	Canceled,
}

impl OrderStatus {
	pub fn label(self) -> MessageDescriptor {
		match self {
			OrderStatus::Draft => MessageDescriptor::described("kE5Nek", "Draft", "order status"),
			OrderStatus::Unconfirmed => {
				MessageDescriptor::described("6vB3rk", "Unconfirmed", "order status")
			}
			OrderStatus::Unfulfilled => {
				MessageDescriptor::described("FlbDpy", "Unfulfilled", "order status")
			}
			OrderStatus::PartiallyFulfilled => {
				MessageDescriptor::described("Wa9qpE", "Partially fulfilled", "order status")
			}
			OrderStatus::Fulfilled => {
				MessageDescriptor::described("mQ7ALk", "Fulfilled", "order status")
			}
			OrderStatus::Canceled => MessageDescriptor::described("bnGCwC", "Canceled", "order status"),
		}
	}

	pub fn color(self) -> ui::PillColor {
		match self {
			OrderStatus::Fulfilled => ui::PillColor::Success,
			OrderStatus::PartiallyFulfilled | OrderStatus::Unfulfilled => ui::PillColor::Warning,
			OrderStatus::Unconfirmed => ui::PillColor::Info,
			OrderStatus::Canceled => ui::PillColor::Error,
			OrderStatus::Draft => ui::PillColor::Neutral,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
	NotCharged,
	PartiallyCharged,
	FullyCharged,
	Refunded,
}

impl PaymentStatus {
	pub fn label(self) -> MessageDescriptor {
		match self {
			PaymentStatus::NotCharged => {
				MessageDescriptor::described("Pu2ExH", "Unpaid", "payment status")
			}
			PaymentStatus::PartiallyCharged => {
				MessageDescriptor::described("lnXoM4", "Partially paid", "payment status")
			}
			PaymentStatus::FullyCharged => {
				MessageDescriptor::described("iKxFMw", "Fully paid", "payment status")
			}
			PaymentStatus::Refunded => {
				MessageDescriptor::described("YtXf1d", "Refunded", "payment status")
			}
		}
	}

	pub fn color(self) -> ui::PillColor {
		match self {
			PaymentStatus::FullyCharged => ui::PillColor::Success,
			PaymentStatus::PartiallyCharged => ui::PillColor::Warning,
			PaymentStatus::NotCharged => ui::PillColor::Error,
			PaymentStatus::Refunded => ui::PillColor::Neutral,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
	pub id: String,
	pub number: u64,
	pub created: DateTime<Utc>,
	pub customer: Option<String>,
	pub payment_status: PaymentStatus,
	pub status: OrderStatus,
	pub total: Money,
}

impl Entity for Order {
	fn id(&self) -> &str {
		&self.id
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderListSortField {
	Number,
	Date,
	Customer,
	Payment,
	Fulfillment,
}

impl SortField for OrderListSortField {
	fn as_str(self) -> &'static str {
		match self {
			OrderListSortField::Number => "number",
			OrderListSortField::Date => "date",
			OrderListSortField::Customer => "customer",
			OrderListSortField::Payment => "payment",
			OrderListSortField::Fulfillment => "status",
		}
	}

	fn parse(value: &str) -> Option<Self> {
		match value {
			"number" => Some(OrderListSortField::Number),
			"date" => Some(OrderListSortField::Date),
			"customer" => Some(OrderListSortField::Customer),
			"payment" => Some(OrderListSortField::Payment),
			"status" => Some(OrderListSortField::Fulfillment),
			_ => None,
		}
	}
}

/// A named search the user saved as a tab above the order list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedTab {
	pub name: String,
	pub query: String,
}

/// Shop-wide switches for how new orders are processed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderSettings {
	pub automatically_confirm_all_new_orders: bool,
	pub automatically_fulfill_non_shippable_gift_card: bool,
}

impl Default for OrderSettings {
	fn default() -> OrderSettings {
		OrderSettings {
			automatically_confirm_all_new_orders: true,
			automatically_fulfill_non_shippable_gift_card: true,
		}
	}
}
