use dioxus::prelude::*;

use crate::auth::{use_api, use_error_reporter};
use crate::charts::{BarChart, DonutChart, Slice};
use crate::icons::{FaBoxOpen, FaEnvelope, FaIndianRupeeSign, FaUsers};
use crate::Icon;

#[component]
fn InfoCard(title: String, value: String, children: Element) -> Element {
    rsx! {
        div { class: "info-card",
            div { class: "info-card-icon", {children} }
            div {
                h2 { class: "info-card-title", "{title}" }
                p { class: "info-card-value", "{value}" }
            }
        }
    }
}

/// Summary cards and charts.
#[component]
pub fn DashboardView() -> Element {
    let api = use_api();
    let reporter = use_error_reporter();

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            api.fetch_dashboard().await.map_err(|e| {
                reporter.report(&e, "Failed to load dashboard data");
                e
            })
        }
    });

    let body = match &*data.read() {
        None => rsx! { p { class: "page-status", "Loading dashboard..." } },
        Some(Err(_)) => rsx! { p { class: "page-status error", "Failed to load dashboard data" } },
        Some(Ok(d)) => {
            let slices = vec![
                Slice {
                    label: "Active Clients".to_string(),
                    value: d.split.active_clients as f64,
                    color: "#22c55e".to_string(),
                },
                Slice {
                    label: "Inactive Clients".to_string(),
                    value: d.split.inactive_clients as f64,
                    color: "#ef4444".to_string(),
                },
            ];
            rsx! {
                div { class: "card-grid",
                    InfoCard { title: "Total Revenue", value: d.revenue_card(),
                        Icon { icon: FaIndianRupeeSign, width: 24, height: 24 }
                    }
                    InfoCard { title: "Total Active Clients", value: "{d.active_client_count}",
                        Icon { icon: FaUsers, width: 24, height: 24 }
                    }
                    InfoCard { title: "Total Enquiry", value: "{d.metrics.total_enquiries}",
                        Icon { icon: FaEnvelope, width: 24, height: 24 }
                    }
                    InfoCard { title: "Total Products", value: "{d.metrics.total_products}",
                        Icon { icon: FaBoxOpen, width: 24, height: 24 }
                    }
                }
                div { class: "chart-grid",
                    BarChart {
                        title: "Monthly Revenue",
                        points: d.monthly_revenue.clone(),
                        color: "#3b82f6",
                    }
                    DonutChart { title: "Client Distribution", slices }
                    BarChart {
                        title: "Monthly Enquiries",
                        points: d.monthly_enquiries.clone(),
                        color: "#f59e0b",
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Dashboard" }
            {body}
        }
    }
}
