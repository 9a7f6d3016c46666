//! Static records shown by the dashboard pages.

use std::sync::OnceLock;

use crate::types::{Kpi, Lead, LeadStage, MemberStatus, OrderStatus, PurchaseOrder, TeamMember};

fn member(id: u32, name: &str, role: &str, region: &str, status: MemberStatus, open_tickets: u32) -> TeamMember {
    TeamMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        region: region.to_string(),
        status,
        open_tickets,
    }
}

pub fn field_team() -> Vec<TeamMember> {
    vec![
        member(1, "Amara Okafor", "Field Lead", "North", MemberStatus::Active, 4),
        member(2, "Lucas Ferreira", "Installer", "North", MemberStatus::OnBreak, 2),
        member(3, "Priya Natarajan", "Service Engineer", "Central", MemberStatus::Active, 7),
        member(4, "Tomasz Nowak", "Installer", "Central", MemberStatus::Inactive, 0),
        member(5, "Hana Sato", "Service Engineer", "South", MemberStatus::Active, 3),
        member(6, "Diego Alvarez", "Surveyor", "South", MemberStatus::OnBreak, 1),
    ]
}

fn leads() -> &'static [Lead] {
    static LEADS: OnceLock<Vec<Lead>> = OnceLock::new();
    LEADS.get_or_init(|| {
        vec![
            Lead {
                id: 101,
                name: "Jordan Blake".to_string(),
                company: "Harbor Logistics".to_string(),
                email: "jordan.blake@harborlogistics.example".to_string(),
                phone: "+1 555 0101".to_string(),
                stage: LeadStage::Qualified,
                estimated_value_cents: 4_850_000,
                owner: "Amara Okafor".to_string(),
                source: "Trade show".to_string(),
                created_on: "2024-03-04".to_string(),
                notes: vec![
                    "Needs fleet telemetry for 40 trucks.".to_string(),
                    "Budget approved for Q3.".to_string(),
                ],
            },
            Lead {
                id: 102,
                name: "Elif Demir".to_string(),
                company: "Brightside Clinics".to_string(),
                email: "elif@brightside.example".to_string(),
                phone: "+1 555 0102".to_string(),
                stage: LeadStage::Proposal,
                estimated_value_cents: 12_300_000,
                owner: "Priya Natarajan".to_string(),
                source: "Referral".to_string(),
                created_on: "2024-02-18".to_string(),
                notes: vec!["Proposal sent, follow up after board meeting.".to_string()],
            },
            Lead {
                id: 103,
                name: "Marcus Lee".to_string(),
                company: "Lee & Sons Hardware".to_string(),
                email: "marcus@leeandsons.example".to_string(),
                phone: "+1 555 0103".to_string(),
                stage: LeadStage::New,
                estimated_value_cents: 950_000,
                owner: "Hana Sato".to_string(),
                source: "Website".to_string(),
                created_on: "2024-04-01".to_string(),
                notes: Vec::new(),
            },
            Lead {
                id: 104,
                name: "Sofia Rossi".to_string(),
                company: "Verde Foods".to_string(),
                email: "s.rossi@verdefoods.example".to_string(),
                phone: "+1 555 0104".to_string(),
                stage: LeadStage::Won,
                estimated_value_cents: 7_200_000,
                owner: "Amara Okafor".to_string(),
                source: "Cold call".to_string(),
                created_on: "2024-01-09".to_string(),
                notes: vec!["Contract signed 2024-03-28.".to_string()],
            },
        ]
    })
}

pub fn all_leads() -> &'static [Lead] {
    leads()
}

pub fn find_lead(id: u32) -> Option<&'static Lead> {
    leads().iter().find(|lead| lead.id == id)
}

fn order(number: &str, vendor: &str, issued_on: &str, status: OrderStatus, amount_cents: u64) -> PurchaseOrder {
    PurchaseOrder {
        number: number.to_string(),
        vendor: vendor.to_string(),
        issued_on: issued_on.to_string(),
        status,
        amount_cents,
    }
}

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    vec![
        order("PO-2024-0311", "Acme Cable Co.", "2024-03-11", OrderStatus::Shipped, 1_245_050),
        order("PO-2024-0315", "Northern Fixtures", "2024-03-15", OrderStatus::Approved, 389_900),
        order("PO-2024-0320", "Voltline Supply", "2024-03-20", OrderStatus::Pending, 2_010_000),
        order("PO-2024-0322", "Acme Cable Co.", "2024-03-22", OrderStatus::Cancelled, 560_000),
        order("PO-2024-0402", "Summit Tools", "2024-04-02", OrderStatus::Pending, 74_525),
    ]
}

fn kpi(label: &str, value: f64, previous: f64, unit: &str) -> Kpi {
    Kpi {
        label: label.to_string(),
        value,
        previous,
        unit: unit.to_string(),
    }
}

pub fn technical_kpis() -> Vec<Kpi> {
    vec![
        kpi("System uptime", 99.93, 99.71, "%"),
        kpi("Mean time to repair", 3.4, 4.1, "h"),
        kpi("First-visit fix rate", 87.0, 87.0, "%"),
        kpi("Open incidents", 18.0, 12.0, ""),
    ]
}

/// Monthly resolved tickets for the overview chart.
pub fn resolved_tickets_series() -> Vec<(&'static str, f64)> {
    vec![
        ("Jan", 182.0),
        ("Feb", 205.0),
        ("Mar", 198.0),
        ("Apr", 240.0),
        ("May", 262.0),
        ("Jun", 251.0),
        ("Jul", 289.0),
        ("Aug", 301.0),
    ]
}
