//! Column schema of the destination platform's product import template.
//!
//! Every row, header included, has exactly [`COLUMN_COUNT`] cells in the
//! order of [`Column::ALL`].

/// Number of columns in the import template.
pub const COLUMN_COUNT: usize = 57;

/// One column of the import template, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    Handle,
    Description,
    Vendor,
    ProductCategory,
    Type,
    Tags,
    Published,
    Status,
    Sku,
    Barcode,
    Option1Name,
    Option1Value,
    Option1LinkedTo,
    Option2Name,
    Option2Value,
    Option2LinkedTo,
    Option3Name,
    Option3Value,
    Option3LinkedTo,
    Price,
    CompareAtPrice,
    CostPerItem,
    ChargeTax,
    TaxCode,
    UnitPriceTotalMeasure,
    UnitPriceTotalMeasureUnit,
    UnitPriceBaseMeasure,
    UnitPriceBaseMeasureUnit,
    InventoryTracker,
    InventoryQuantity,
    ContinueSelling,
    WeightGrams,
    WeightUnit,
    RequiresShipping,
    FulfillmentService,
    ImageUrl,
    ImagePosition,
    ImageAltText,
    VariantImageUrl,
    GiftCard,
    SeoTitle,
    SeoDescription,
    ColorPattern,
    GoogleProductCategory,
    GoogleGender,
    GoogleAgeGroup,
    GoogleMpn,
    GoogleAdGroupName,
    GoogleAdsLabels,
    GoogleCondition,
    GoogleCustomProduct,
    GoogleCustomLabel0,
    GoogleCustomLabel1,
    GoogleCustomLabel2,
    GoogleCustomLabel3,
    GoogleCustomLabel4,
}

impl Column {
    /// All columns in template order.
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Title,
        Column::Handle,
        Column::Description,
        Column::Vendor,
        Column::ProductCategory,
        Column::Type,
        Column::Tags,
        Column::Published,
        Column::Status,
        Column::Sku,
        Column::Barcode,
        Column::Option1Name,
        Column::Option1Value,
        Column::Option1LinkedTo,
        Column::Option2Name,
        Column::Option2Value,
        Column::Option2LinkedTo,
        Column::Option3Name,
        Column::Option3Value,
        Column::Option3LinkedTo,
        Column::Price,
        Column::CompareAtPrice,
        Column::CostPerItem,
        Column::ChargeTax,
        Column::TaxCode,
        Column::UnitPriceTotalMeasure,
        Column::UnitPriceTotalMeasureUnit,
        Column::UnitPriceBaseMeasure,
        Column::UnitPriceBaseMeasureUnit,
        Column::InventoryTracker,
        Column::InventoryQuantity,
        Column::ContinueSelling,
        Column::WeightGrams,
        Column::WeightUnit,
        Column::RequiresShipping,
        Column::FulfillmentService,
        Column::ImageUrl,
        Column::ImagePosition,
        Column::ImageAltText,
        Column::VariantImageUrl,
        Column::GiftCard,
        Column::SeoTitle,
        Column::SeoDescription,
        Column::ColorPattern,
        Column::GoogleProductCategory,
        Column::GoogleGender,
        Column::GoogleAgeGroup,
        Column::GoogleMpn,
        Column::GoogleAdGroupName,
        Column::GoogleAdsLabels,
        Column::GoogleCondition,
        Column::GoogleCustomProduct,
        Column::GoogleCustomLabel0,
        Column::GoogleCustomLabel1,
        Column::GoogleCustomLabel2,
        Column::GoogleCustomLabel3,
        Column::GoogleCustomLabel4,
    ];

    /// Header text as it appears in the template.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Handle => "URL handle",
            Column::Description => "Description",
            Column::Vendor => "Vendor",
            Column::ProductCategory => "Product category",
            Column::Type => "Type",
            Column::Tags => "Tags",
            Column::Published => "Published on online store",
            Column::Status => "Status",
            Column::Sku => "SKU",
            Column::Barcode => "Barcode",
            Column::Option1Name => "Option1 name",
            Column::Option1Value => "Option1 value",
            Column::Option1LinkedTo => "Option1 Linked To",
            Column::Option2Name => "Option2 name",
            Column::Option2Value => "Option2 value",
            Column::Option2LinkedTo => "Option2 Linked To",
            Column::Option3Name => "Option3 name",
            Column::Option3Value => "Option3 value",
            Column::Option3LinkedTo => "Option3 Linked To",
            Column::Price => "Price",
            Column::CompareAtPrice => "Compare-at price",
            Column::CostPerItem => "Cost per item",
            Column::ChargeTax => "Charge tax",
            Column::TaxCode => "Tax code",
            Column::UnitPriceTotalMeasure => "Unit price total measure",
            Column::UnitPriceTotalMeasureUnit => "Unit price total measure unit",
            Column::UnitPriceBaseMeasure => "Unit price base measure",
            Column::UnitPriceBaseMeasureUnit => "Unit price base measure unit",
            Column::InventoryTracker => "Inventory tracker",
            Column::InventoryQuantity => "Inventory quantity",
            Column::ContinueSelling => "Continue selling when out of stock",
            Column::WeightGrams => "Weight value (grams)",
            Column::WeightUnit => "Weight unit for display",
            Column::RequiresShipping => "Requires shipping",
            Column::FulfillmentService => "Fulfillment service",
            Column::ImageUrl => "Product image URL",
            Column::ImagePosition => "Image position",
            Column::ImageAltText => "Image alt text",
            Column::VariantImageUrl => "Variant image URL",
            Column::GiftCard => "Gift card",
            Column::SeoTitle => "SEO title",
            Column::SeoDescription => "SEO description",
            Column::ColorPattern => "Color (product.metafields.shopify.color-pattern)",
            Column::GoogleProductCategory => "Google Shopping / Google product category",
            Column::GoogleGender => "Google Shopping / Gender",
            Column::GoogleAgeGroup => "Google Shopping / Age group",
            Column::GoogleMpn => "Google Shopping / Manufacturer part number (MPN)",
            Column::GoogleAdGroupName => "Google Shopping / Ad group name",
            Column::GoogleAdsLabels => "Google Shopping / Ads labels",
            Column::GoogleCondition => "Google Shopping / Condition",
            Column::GoogleCustomProduct => "Google Shopping / Custom product",
            Column::GoogleCustomLabel0 => "Google Shopping / Custom label 0",
            Column::GoogleCustomLabel1 => "Google Shopping / Custom label 1",
            Column::GoogleCustomLabel2 => "Google Shopping / Custom label 2",
            Column::GoogleCustomLabel3 => "Google Shopping / Custom label 3",
            Column::GoogleCustomLabel4 => "Google Shopping / Custom label 4",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// One output row: a cell per column, empty unless set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    cells: Vec<String>,
}

impl Default for ExportRow {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportRow {
    /// A row with every cell empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![String::new(); COLUMN_COUNT],
        }
    }

    /// The header row.
    #[must_use]
    pub fn header() -> Self {
        Self {
            cells: Column::ALL.iter().map(|c| c.header().to_owned()).collect(),
        }
    }

    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        self.cells[column.index()] = value.into();
    }

    #[must_use]
    pub fn get(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }

    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}
