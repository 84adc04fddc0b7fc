//! Variable catalog for the template editor.
//!
//! A static registry of the placeholder keys document templates are expected
//! to use, grouped into categories. The engine does not consult it (any key
//! present in the context resolves); it drives the `variables` listing and
//! the unknown-key warnings of `validate`.
//!
//! Categories bound to a repeating section list the per-item fields of that
//! section. Their variables are only meaningful inside the section block.

/// A single insertable placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable {
    /// The exact placeholder key.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

impl Variable {
    /// The placeholder text to insert, e.g. `{{order_number}}`.
    pub fn placeholder(&self) -> String {
        format!("{{{{{}}}}}", self.key)
    }
}

/// A group of related variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableCategory {
    /// Category key used on the command line.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Repeating section whose item fields this category lists.
    pub section: Option<&'static str>,
    /// Variables in display order.
    pub variables: &'static [Variable],
}

impl VariableCategory {
    /// An empty repeating block for section categories, e.g.
    /// `{{#containers}}\n{{/containers}}`.
    pub fn section_block(&self) -> Option<String> {
        self.section
            .map(|name| format!("{{{{#{name}}}}}\n{{{{/{name}}}}}"))
    }
}

const fn var(key: &'static str, label: &'static str) -> Variable {
    Variable { key, label }
}

static CATALOG: &[VariableCategory] = &[
    VariableCategory {
        key: "order",
        label: "Order",
        section: None,
        variables: &[
            var("order_number", "Order Number"),
            var("order_date", "Order Date"),
            var("reference_number", "Customer Reference"),
            var("incoterms", "Incoterms"),
            var("payment_terms", "Payment Terms"),
            var("currency", "Currency"),
            var("total_quantity", "Total Quantity"),
            var("total_amount", "Total Amount"),
            var("notes", "Notes"),
        ],
    },
    VariableCategory {
        key: "parties",
        label: "Parties",
        section: None,
        variables: &[
            var("buyer_company", "Buyer Company"),
            var("buyer_address", "Buyer Address"),
            var("buyer_contact", "Buyer Contact"),
            var("seller_company", "Seller Company"),
            var("seller_address", "Seller Address"),
            var("seller_contact", "Seller Contact"),
            var("consignee", "Consignee"),
            var("notify_party", "Notify Party"),
            var("trader_name", "Trader"),
        ],
    },
    VariableCategory {
        key: "shipment",
        label: "Shipment",
        section: None,
        variables: &[
            var("bl_number", "B/L Number"),
            var("shipping_line", "Shipping Line"),
            var("vessel_name", "Vessel Name"),
            var("voyage_number", "Voyage Number"),
            var("port_of_loading", "Port of Loading"),
            var("port_of_discharge", "Port of Discharge"),
            var("etd", "ETD"),
            var("eta", "ETA"),
        ],
    },
    VariableCategory {
        key: "signature",
        label: "Signature",
        section: None,
        variables: &[
            var("signatory_name", "Signatory Name"),
            var("signatory_title", "Signatory Title"),
            var("signature_date", "Signature Date"),
        ],
    },
    VariableCategory {
        key: "line_items",
        label: "Line Items",
        section: Some("line_items"),
        variables: &[
            var("product_name", "Product"),
            var("product_description", "Description"),
            var("quantity", "Quantity"),
            var("unit", "Unit"),
            var("unit_price", "Unit Price"),
            var("line_total", "Line Total"),
        ],
    },
    VariableCategory {
        key: "containers",
        label: "Containers",
        section: Some("containers"),
        variables: &[
            var("container_number", "Container Number"),
            var("seal_number", "Seal Number"),
            var("container_type", "Container Type"),
            var("packages", "Packages"),
            var("gross_weight", "Gross Weight (kg)"),
            var("net_weight", "Net Weight (kg)"),
        ],
    },
    VariableCategory {
        key: "shipments",
        label: "Shipments",
        section: Some("shipments"),
        variables: &[
            var("shipment_number", "Shipment Number"),
            var("shipment_status", "Status"),
            var("departure_date", "Departure Date"),
            var("arrival_date", "Arrival Date"),
            var("container_count", "Containers"),
        ],
    },
];

/// All catalog categories in display order.
pub fn catalog() -> &'static [VariableCategory] {
    CATALOG
}

/// Find a category by key.
pub fn find_category(key: &str) -> Option<&'static VariableCategory> {
    CATALOG.iter().find(|c| c.key == key)
}

/// Whether a key is known to the catalog, either as a scalar or a section.
pub fn is_known_key(key: &str) -> bool {
    CATALOG
        .iter()
        .any(|c| c.section == Some(key) || c.variables.iter().any(|v| v.key == key))
}
