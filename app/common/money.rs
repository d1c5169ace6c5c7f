/// An amount in minor units, cents for most currencies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Money {
	pub amount: i64,
	pub currency: String,
}

impl std::fmt::Display for Money {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let sign = if self.amount < 0 { "-" } else { "" };
		let amount = self.amount.abs();
		write!(f, "{}{} {}.{:02}", sign, self.currency, amount / 100, amount % 100)
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoneyRange {
	pub start: Option<Money>,
	pub stop: Option<Money>,
}

impl std::fmt::Display for MoneyRange {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match (&self.start, &self.stop) {
			(Some(start), Some(stop)) if start == stop => write!(f, "{}", start),
			(Some(start), Some(stop)) => write!(f, "{} - {}", start, stop),
			(Some(start), None) => write!(f, "from {}", start),
			(None, Some(stop)) => write!(f, "to {}", stop),
			(None, None) => f.write_str("-"),
		}
	}
}

#[test]
fn test_money_range() {
	let usd = |amount| Money {
		amount,
		currency: "USD".to_owned(),
	};
	assert_eq!(usd(1250).to_string(), "USD 12.50");
	assert_eq!(usd(-5).to_string(), "-USD 0.05");
	let range = MoneyRange {
		start: Some(usd(500)),
		stop: Some(usd(500)),
	};
	assert_eq!(range.to_string(), "USD 5.00");
	let range = MoneyRange {
		start: Some(usd(500)),
		stop: Some(usd(1999)),
	};
	assert_eq!(range.to_string(), "USD 5.00 - USD 19.99");
	let range = MoneyRange {
		start: None,
		stop: Some(usd(100)),
	};
	assert_eq!(range.to_string(), "to USD 1.00");
	assert_eq!(MoneyRange::default().to_string(), "-");
}
