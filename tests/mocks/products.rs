//! Product fixtures for testing.
//!
//! Provides builders for ingredient and product records plus canned products:
//! - Clean products that validate to Completed
//! - Products carrying one class of fault each
//! - Helpers for writing fixtures to temporary JSON/TOML files

use msds_check::{IngredientRecord, ProductRecord};
use std::io::Write;
use tempfile::NamedTempFile;

/// Builder for an ingredient record
#[derive(Debug, Clone)]
pub struct MockIngredient {
    record: IngredientRecord,
}

impl MockIngredient {
    pub fn new(id: &str, name: &str) -> Self {
        MockIngredient {
            record: IngredientRecord {
                id: id.to_string(),
                name: name.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn cas(mut self, cas: &str) -> Self {
        self.record.cas_number = Some(cas.to_string());
        self
    }

    pub fn content(mut self, text: &str) -> Self {
        self.record.percentage_text = Some(text.to_string());
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.record.percentage_value = Some(value);
        self
    }

    pub fn hazard(mut self, text: &str) -> Self {
        self.record.hazard_text = Some(text.to_string());
        self
    }

    pub fn build(self) -> IngredientRecord {
        self.record
    }
}

/// Builder for a product record
#[derive(Debug, Clone, Default)]
pub struct MockProduct {
    record: ProductRecord,
}

impl MockProduct {
    pub fn new(name: &str) -> Self {
        MockProduct {
            record: ProductRecord {
                name: name.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn hazard(mut self, text: &str) -> Self {
        self.record.hazard_text = Some(text.to_string());
        self
    }

    pub fn ingredient(mut self, ingredient: MockIngredient) -> Self {
        self.record.ingredients.push(ingredient.build());
        self
    }

    pub fn build(self) -> ProductRecord {
        self.record
    }
}

/// Water and ethanol, fully disclosed, no findings
pub fn clean_product() -> ProductRecord {
    MockProduct::new("세정제 A")
        .hazard("인화성 액체 구분2, 눈 자극성 구분2A")
        .ingredient(MockIngredient::new("1", "정제수").cas("7732-18-5").content("60-70%"))
        .ingredient(MockIngredient::new("2", "에탄올").cas("64-17-5").content("30%"))
        .build()
}

/// Every ingredient carries an auto-fixable fault
pub fn fixable_product() -> ProductRecord {
    MockProduct::new("세정제 B")
        .ingredient(MockIngredient::new("1", "Water").cas("7732185").content("60%"))
        .ingredient(MockIngredient::new("2", "에탄올").cas("64-17-6").content("39.9999%"))
        .build()
}

/// Product whose contents add up to more than 100%
pub fn overfilled_product() -> ProductRecord {
    MockProduct::new("세정제 C")
        .ingredient(MockIngredient::new("1", "정제수").cas("7732-18-5").content("50%"))
        .ingredient(MockIngredient::new("2", "에탄올").cas("64-17-5").content("51%"))
        .build()
}

/// Product with a hazardous substance above its safe limit
pub fn hazardous_product() -> ProductRecord {
    MockProduct::new("희석제 D")
        .hazard("인화성 액체 구분2, 발암성 구분1A")
        .ingredient(MockIngredient::new("1", "톨루엔").cas("108-88-3").content("60-70%"))
        .ingredient(MockIngredient::new("2", "벤젠").cas("71-43-2").content("0.5%"))
        .ingredient(MockIngredient::new("3", "이소프로필알코올").cas("67-63-0").content("<29.5%"))
        .build()
}

/// Write products as a JSON array to a temporary file
pub fn write_products(products: &[ProductRecord]) -> NamedTempFile {
    let json = serde_json::to_string_pretty(products).expect("serialize fixture");
    write_temp(&json, ".json")
}

/// Write text to a temporary file with the given suffix
pub fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
