use crate::core::serializer::{integer, list, number, object, string, timestamp};
use crate::domain::property::{Field, XdmSchema};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::{DateTime, Utc};

/// Product list saved for future use, for example a wish list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaveForLaters {
    id: Option<String>,
    value: f64,
}

impl SaveForLaters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client-generated unique identifier of the measure, `None` when unset.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Passing `None` clears the identifier.
    pub fn set_id<S: Into<String>>(&mut self, id: Option<S>) {
        self.id = id.map(Into::into);
    }

    /// Quantifiable value of this measure.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}

impl XdmSchema for SaveForLaters {
    const NODE: &'static str = "SaveForLaters";
    const FIELDS: &'static [Field<Self>] = &[
        Field::optional("id", |m| m.id.as_deref().map(string)),
        Field::required("value", |m| Some(number(m.value))),
    ];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListItem {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub quantity: i64,
    pub price_total: f64,
    /// ISO 4217 code, e.g. `USD`.
    pub currency_code: Option<String>,
}

impl XdmSchema for ProductListItem {
    const NODE: &'static str = "ProductListItem";
    const FIELDS: &'static [Field<Self>] = &[
        Field::optional("SKU", |p| p.sku.as_deref().map(string)),
        Field::optional("name", |p| p.name.as_deref().map(string)),
        Field::required("quantity", |p| Some(integer(p.quantity))),
        Field::required("priceTotal", |p| Some(number(p.price_total))),
        Field::optional("currencyCode", |p| p.currency_code.as_deref().map(string)),
    ];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Commerce {
    pub save_for_laters: Option<SaveForLaters>,
}

impl XdmSchema for Commerce {
    const NODE: &'static str = "Commerce";
    const FIELDS: &'static [Field<Self>] = &[Field::optional("saveForLaters", |c| {
        c.save_for_laters.as_ref().map(object)
    })];

    fn validate_nested(&self) -> Result<()> {
        if let Some(measure) = &self.save_for_laters {
            measure.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceEvent {
    pub event_type: Option<String>,
    /// Required by the schema but left to the caller; unset timestamps are
    /// omitted on serialization and reported by validation.
    pub timestamp: Option<DateTime<Utc>>,
    pub commerce: Option<Commerce>,
    pub product_list_items: Option<Vec<ProductListItem>>,
}

impl XdmSchema for ExperienceEvent {
    const NODE: &'static str = "ExperienceEvent";
    const FIELDS: &'static [Field<Self>] = &[
        Field::optional("eventType", |e| e.event_type.as_deref().map(string)),
        Field::required("timestamp", |e| e.timestamp.as_ref().map(timestamp)),
        Field::optional("commerce", |e| e.commerce.as_ref().map(object)),
        Field::optional("productListItems", |e| {
            e.product_list_items.as_deref().map(list)
        }),
    ];

    fn validate_nested(&self) -> Result<()> {
        if let Some(commerce) = &self.commerce {
            commerce.validate()?;
        }
        for item in self.product_list_items.iter().flatten() {
            item.validate()?;
        }
        Ok(())
    }
}
