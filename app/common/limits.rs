/// Usage counters of a shop, per limited resource. `None` means unlimited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Usage {
	pub channels: Option<u64>,
	pub orders: Option<u64>,
	pub product_variants: Option<u64>,
	pub staff_users: Option<u64>,
	pub warehouses: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LimitKind {
	Channels,
	Orders,
	ProductVariants,
	StaffUsers,
	Warehouses,
}

impl Usage {
	pub fn get(&self, kind: LimitKind) -> Option<u64> {
		match kind {
			LimitKind::Channels => self.channels,
			LimitKind::Orders => self.orders,
			LimitKind::ProductVariants => self.product_variants,
			LimitKind::StaffUsers => self.staff_users,
			LimitKind::Warehouses => self.warehouses,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
	pub current_usage: Usage,
	pub allowed_usage: Usage,
}

pub fn has_limits(limits: &Limits, kind: LimitKind) -> bool {
	limits.allowed_usage.get(kind).is_some()
}

pub fn is_limit_reached(limits: &Limits, kind: LimitKind) -> bool {
	match (limits.current_usage.get(kind), limits.allowed_usage.get(kind)) {
		(Some(current), Some(allowed)) => current >= allowed,
		(None, Some(allowed)) => allowed == 0,
		(_, None) => false,
	}
}

#[test]
fn test_limits() {
	let mut limits = Limits::default();
	assert!(!has_limits(&limits, LimitKind::Orders));
	assert!(!is_limit_reached(&limits, LimitKind::Orders));
	limits.allowed_usage.orders = Some(2);
	limits.current_usage.orders = Some(1);
	assert!(has_limits(&limits, LimitKind::Orders));
	assert!(!is_limit_reached(&limits, LimitKind::Orders));
	limits.current_usage.orders = Some(2);
	assert!(is_limit_reached(&limits, LimitKind::Orders));
	assert!(!is_limit_reached(&limits, LimitKind::Channels));
}
