use serde::{Deserialize, Serialize};

/// Badge text and CSS class for a status-like enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

// Team status

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberStatus {
    Active,
    Inactive,
    OnBreak,
}

impl MemberStatus {
    pub fn badge(&self) -> StatusBadge {
        match self {
            MemberStatus::Active => StatusBadge { label: "Active", class: "badge badge-green" },
            MemberStatus::Inactive => StatusBadge { label: "Inactive", class: "badge badge-gray" },
            MemberStatus::OnBreak => StatusBadge { label: "On break", class: "badge badge-amber" },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub region: String,
    pub status: MemberStatus,
    pub open_tickets: u32,
}

impl TeamMember {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: usize,
    pub inactive: usize,
    pub on_break: usize,
}

pub fn status_counts(members: &[TeamMember]) -> StatusCounts {
    members.iter().fold(StatusCounts::default(), |mut counts, m| {
        match m.status {
            MemberStatus::Active => counts.active += 1,
            MemberStatus::Inactive => counts.inactive += 1,
            MemberStatus::OnBreak => counts.on_break += 1,
        }
        counts
    })
}

// Leads

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStage {
    New,
    Contacted,
    Qualified,
    Proposal,
    Won,
    Lost,
}

impl LeadStage {
    pub fn badge(&self) -> StatusBadge {
        match self {
            LeadStage::New => StatusBadge { label: "New", class: "badge badge-blue" },
            LeadStage::Contacted => StatusBadge { label: "Contacted", class: "badge badge-indigo" },
            LeadStage::Qualified => StatusBadge { label: "Qualified", class: "badge badge-teal" },
            LeadStage::Proposal => StatusBadge { label: "Proposal sent", class: "badge badge-amber" },
            LeadStage::Won => StatusBadge { label: "Won", class: "badge badge-green" },
            LeadStage::Lost => StatusBadge { label: "Lost", class: "badge badge-red" },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub stage: LeadStage,
    pub estimated_value_cents: u64,
    pub owner: String,
    pub source: String,
    pub created_on: String,
    pub notes: Vec<String>,
}

// Purchase orders

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Approved,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    pub fn badge(&self) -> StatusBadge {
        match self {
            OrderStatus::Pending => StatusBadge { label: "Pending", class: "badge badge-amber" },
            OrderStatus::Approved => StatusBadge { label: "Approved", class: "badge badge-blue" },
            OrderStatus::Shipped => StatusBadge { label: "Shipped", class: "badge badge-green" },
            OrderStatus::Cancelled => StatusBadge { label: "Cancelled", class: "badge badge-red" },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub number: String,
    pub vendor: String,
    pub issued_on: String,
    pub status: OrderStatus,
    pub amount_cents: u64,
}

/// Sum of every order that has not been cancelled.
pub fn open_total(orders: &[PurchaseOrder]) -> u64 {
    orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.amount_cents)
        .sum()
}

/// `1234567` -> `$12,345.67`
pub fn format_money(cents: u64) -> String {
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{:02}", cents % 100)
}

// KPIs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "■",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Trend::Up => "kpi-trend kpi-trend-up",
            Trend::Down => "kpi-trend kpi-trend-down",
            Trend::Flat => "kpi-trend kpi-trend-flat",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: f64,
    pub previous: f64,
    pub unit: String,
}

impl Kpi {
    /// Change against the previous period, in percent. `None` when there is
    /// no previous value to compare with.
    pub fn delta_percent(&self) -> Option<f64> {
        if self.previous == 0.0 {
            return None;
        }
        Some((self.value - self.previous) / self.previous.abs() * 100.0)
    }

    pub fn trend(&self) -> Trend {
        match self.delta_percent() {
            Some(d) if d > 0.05 => Trend::Up,
            Some(d) if d < -0.05 => Trend::Down,
            _ => Trend::Flat,
        }
    }
}
