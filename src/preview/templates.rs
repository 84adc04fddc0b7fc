//! Built-in starter templates, one per document category.

use crate::template::TemplateCategory;

/// A built-in template used to seed a new store.
#[derive(Debug, Clone, Copy)]
pub struct SampleTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub content: &'static str,
}

/// All built-in templates in category order.
pub fn sample_templates() -> &'static [SampleTemplate] {
    SAMPLE_TEMPLATES
}

static SAMPLE_TEMPLATES: &[SampleTemplate] = &[
    SampleTemplate {
        name: "Standard Purchase Order",
        description: "Purchase order sent to a supplier",
        category: TemplateCategory::PurchaseOrder,
        content: PURCHASE_ORDER,
    },
    SampleTemplate {
        name: "Standard Sales Order",
        description: "Sales order confirmation sent to a buyer",
        category: TemplateCategory::SalesOrder,
        content: SALES_ORDER,
    },
    SampleTemplate {
        name: "Ocean Bill of Lading",
        description: "Bill of lading with container details",
        category: TemplateCategory::BillOfLading,
        content: BILL_OF_LADING,
    },
    SampleTemplate {
        name: "Commercial Invoice",
        description: "Invoice covering all shipments of an order",
        category: TemplateCategory::CommercialInvoice,
        content: COMMERCIAL_INVOICE,
    },
];

const PURCHASE_ORDER: &str = r##"<html>
<body style="font-family: Arial, sans-serif; color: #1f2937;">
  <img class="logo" src="logo.png" alt="{{buyer_company}}" style="max-height: 80px;">
  <h1>Purchase Order {{order_number}}</h1>
  <p>Date: {{order_date}} &middot; Reference: {{reference_number}}</p>
  <table>
    <tr><th>Buyer</th><th>Supplier</th></tr>
    <tr>
      <td>{{buyer_company}}<br>{{buyer_address}}<br>{{buyer_contact}}</td>
      <td>{{seller_company}}<br>{{seller_address}}<br>{{seller_contact}}</td>
    </tr>
  </table>
  <table>
    <tr><th>Product</th><th>Description</th><th>Quantity</th><th>Unit Price ({{currency}})</th><th>Total</th></tr>
    {{#line_items}}
    <tr><td>{{product_name}}</td><td>{{product_description}}</td><td>{{quantity}} {{unit}}</td><td>{{unit_price}}</td><td>{{line_total}}</td></tr>
    {{/line_items}}
  </table>
  <p>Total: {{currency}} {{total_amount}} ({{total_quantity}})</p>
  <p>Incoterms: {{incoterms}} &middot; Payment: {{payment_terms}}</p>
  <p>{{notes}}</p>
  <p>{{signatory_name}}, {{signatory_title}}<br>{{signature_date}}</p>
</body>
</html>
"##;

const SALES_ORDER: &str = r##"<html>
<body style="font-family: Arial, sans-serif; color: #1f2937;">
  <img class="logo" src="logo.png" alt="{{seller_company}}" style="max-height: 80px;">
  <h1>Sales Order {{order_number}}</h1>
  <p>Date: {{order_date}} &middot; Your reference: {{reference_number}}</p>
  <p>Sold to: {{buyer_company}}, {{buyer_address}}</p>
  <p>Handled by: {{trader_name}}</p>
  <table>
    <tr><th>Product</th><th>Quantity</th><th>Unit Price ({{currency}})</th><th>Total</th></tr>
    {{#line_items}}
    <tr><td>{{product_name}}</td><td>{{quantity}} {{unit}}</td><td>{{unit_price}}</td><td>{{line_total}}</td></tr>
    {{/line_items}}
  </table>
  <p>Total: {{currency}} {{total_amount}}</p>
  <h2>Planned Shipments</h2>
  <ul>
    {{#shipments}}
    <li>{{shipment_number}}: {{port_of_loading}} to {{port_of_discharge}}, departing {{departure_date}}</li>
    {{/shipments}}
  </ul>
  <p>Incoterms: {{incoterms}} &middot; Payment: {{payment_terms}}</p>
</body>
</html>
"##;

const BILL_OF_LADING: &str = r##"<html>
<body style="font-family: Arial, sans-serif; color: #1f2937;">
  <h1>Bill of Lading {{bl_number}}</h1>
  <table>
    <tr><td>Shipper</td><td>{{seller_company}}<br>{{seller_address}}</td></tr>
    <tr><td>Consignee</td><td>{{consignee}}</td></tr>
    <tr><td>Notify Party</td><td>{{notify_party}}</td></tr>
    <tr><td>Carrier</td><td>{{shipping_line}}</td></tr>
    <tr><td>Vessel / Voyage</td><td>{{vessel_name}} / {{voyage_number}}</td></tr>
    <tr><td>Port of Loading</td><td>{{port_of_loading}}</td></tr>
    <tr><td>Port of Discharge</td><td>{{port_of_discharge}}</td></tr>
  </table>
  <table>
    <tr><th>Container</th><th>Seal</th><th>Type</th><th>Packages</th><th>Gross (kg)</th><th>Net (kg)</th></tr>
    {{#containers}}
    <tr><td>{{container_number}}</td><td>{{seal_number}}</td><td>{{container_type}}</td><td>{{packages}}</td><td>{{gross_weight}}</td><td>{{net_weight}}</td></tr>
    {{/containers}}
  </table>
  <p>Shipped on board {{etd}} for {{bl_number}}.</p>
  <p>{{signatory_name}}, {{signatory_title}}</p>
</body>
</html>
"##;

const COMMERCIAL_INVOICE: &str = r##"<html>
<body style="font-family: Arial, sans-serif; color: #1f2937;">
  <img class="logo" src="logo.png" alt="{{seller_company}}" style="max-height: 80px;">
  <h1>Commercial Invoice</h1>
  <p>Order {{order_number}} &middot; B/L {{bl_number}} &middot; {{incoterms}}</p>
  <p>Seller: {{seller_company}}, {{seller_address}}</p>
  <p>Buyer: {{buyer_company}}, {{buyer_address}}</p>
  <table>
    <tr><th>Product</th><th>Quantity</th><th>Unit Price ({{currency}})</th><th>Amount</th></tr>
    {{#line_items}}
    <tr><td>{{product_name}}</td><td>{{quantity}} {{unit}}</td><td>{{unit_price}}</td><td>{{line_total}}</td></tr>
    {{/line_items}}
  </table>
  <h2>Shipments</h2>
  <table>
    <tr><th>Shipment</th><th>Status</th><th>Departure</th><th>Arrival</th><th>Containers</th></tr>
    {{#shipments}}
    <tr><td>{{shipment_number}}</td><td>{{shipment_status}}</td><td>{{departure_date}}</td><td>{{arrival_date}}</td><td>{{container_count}}</td></tr>
    {{/shipments}}
  </table>
  <p>Vessel {{vessel_name}}, ETA {{eta}}</p>
  <p>Invoice total: {{currency}} {{total_amount}}</p>
  <p>Payment terms: {{payment_terms}}</p>
  <p>{{signatory_name}}, {{signatory_title}}<br>{{signature_date}}</p>
</body>
</html>
"##;
