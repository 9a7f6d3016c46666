use dioxus::prelude::*;

use crm_portal::mock_data::purchase_orders;
use crm_portal::types::{format_money, open_total};

use crate::components::widgets::Badge;

#[component]
pub fn PurchaseOrders() -> Element {
    let orders = purchase_orders();
    let total = format_money(open_total(&orders));

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Purchase Orders" }
            }
            table { class: "data-table",
                thead {
                    tr {
                        th { "PO number" }
                        th { "Vendor" }
                        th { "Issued" }
                        th { "Status" }
                        th { class: "numeric", "Amount" }
                    }
                }
                tbody {
                    for order in orders.iter() {
                        tr { key: "{order.number}",
                            td { class: "mono", "{order.number}" }
                            td { "{order.vendor}" }
                            td { "{order.issued_on}" }
                            td { Badge { badge: order.status.badge() } }
                            td { class: "numeric", "{format_money(order.amount_cents)}" }
                        }
                    }
                }
                tfoot {
                    tr {
                        td { colspan: "4", "Open total (excluding cancelled)" }
                        td { class: "numeric", "{total}" }
                    }
                }
            }
        }
    }
}
