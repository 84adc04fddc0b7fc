//! The synthetic data context used for previews.

use crate::engine::DataContext;
use serde_json::{Value, json};
use std::sync::LazyLock;

static SAMPLE_CONTEXT: LazyLock<DataContext> = LazyLock::new(|| match sample_value() {
    Value::Object(map) => map,
    _ => DataContext::new(),
});

/// The sample context, built once per process.
pub fn sample_context() -> &'static DataContext {
    &SAMPLE_CONTEXT
}

fn sample_value() -> Value {
    json!({
        // Order
        "order_number": "PO-2026-0142",
        "order_date": "2026-03-14",
        "reference_number": "CR-88310",
        "incoterms": "CIF Rotterdam",
        "payment_terms": "30% advance, 70% against B/L copy",
        "currency": "USD",
        "total_quantity": "1,250 MT",
        "total_amount": "812,500.00",
        "notes": "Goods to be packed in new 50 kg polypropylene bags.",

        // Parties
        "buyer_company": "Nordhavn Commodities B.V.",
        "buyer_address": "Wilhelminakade 91, 3072 AP Rotterdam, Netherlands",
        "buyer_contact": "Eva de Vries, +31 10 555 0190",
        "seller_company": "Santa Clara Agroexport Ltda.",
        "seller_address": "Rua XV de Novembro 250, Santos SP, Brazil",
        "seller_contact": "Rafael Moura, +55 13 5550 4412",
        "consignee": "Nordhavn Commodities B.V., Rotterdam",
        "notify_party": "Maas Logistics, Europoort, Rotterdam",
        "trader_name": "Sample Trader",

        // Shipment
        "bl_number": "MSCU7784120",
        "shipping_line": "Atlantic Meridian Lines",
        "vessel_name": "MV Cordelia Star",
        "voyage_number": "AM214E",
        "port_of_loading": "Santos, Brazil",
        "port_of_discharge": "Rotterdam, Netherlands",
        "etd": "2026-04-02",
        "eta": "2026-04-21",

        // Signature
        "signatory_name": "Helena Costa",
        "signatory_title": "Head of Trade Operations",
        "signature_date": "2026-03-15",

        "line_items": [
            {
                "product_name": "Refined Sugar ICUMSA 45",
                "product_description": "White crystal sugar, crop 2025/26",
                "quantity": "1,000",
                "unit": "MT",
                "unit_price": "640.00",
                "line_total": "640,000.00"
            },
            {
                "product_name": "Raw Cane Sugar VHP",
                "product_description": "Very high polarization, 99.4 deg min",
                "quantity": "250",
                "unit": "MT",
                "unit_price": "690.00",
                "line_total": "172,500.00"
            }
        ],

        "containers": [
            {
                "container_number": "MSCU1234565",
                "seal_number": "SL-004512",
                "container_type": "20' DV",
                "packages": "500 bags",
                "gross_weight": "25,100",
                "net_weight": "25,000"
            },
            {
                "container_number": "MSCU7654321",
                "seal_number": "SL-004513",
                "container_type": "20' DV",
                "packages": "500 bags",
                "gross_weight": "25,080",
                "net_weight": "25,000"
            }
        ],

        "shipments": [
            {
                "shipment_number": "SHP-0142-A",
                "shipment_status": "In transit",
                "departure_date": "2026-04-02",
                "arrival_date": "2026-04-21",
                "container_count": "20"
            },
            {
                "shipment_number": "SHP-0142-B",
                "shipment_status": "Booked",
                "departure_date": "2026-04-16",
                "arrival_date": "2026-05-05",
                "container_count": "30"
            }
        ]
    })
}
