use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{first_day_of, match_choice};
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

pub const BRAND_MAX_LEN: usize = 50;
pub const MODEL_MAX_LEN: usize = 50;
pub const MAX_CAPACITY_LITRES: f64 = 1_000.0;
pub const MIN_MANUFACTURE_YEAR: i32 = 2010;
pub const MIN_WARRANTY_MONTHS: u32 = 12;
pub const MAX_WARRANTY_MONTHS: u32 = 60;
pub const MAX_PRICE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// EU energy label, ordered from most to least efficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EnergyClass {
    APlusPlusPlus,
    APlusPlus,
    APlus,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl EnergyClass {
    pub const ALL: [EnergyClass; 10] = [
        EnergyClass::APlusPlusPlus,
        EnergyClass::APlusPlus,
        EnergyClass::APlus,
        EnergyClass::A,
        EnergyClass::B,
        EnergyClass::C,
        EnergyClass::D,
        EnergyClass::E,
        EnergyClass::F,
        EnergyClass::G,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyClass::APlusPlusPlus => "A+++",
            EnergyClass::APlusPlus => "A++",
            EnergyClass::APlus => "A+",
            EnergyClass::A => "A",
            EnergyClass::B => "B",
            EnergyClass::C => "C",
            EnergyClass::D => "D",
            EnergyClass::E => "E",
            EnergyClass::F => "F",
            EnergyClass::G => "G",
        }
    }

    pub fn is_more_efficient_than(&self, other: EnergyClass) -> bool {
        *self < other
    }
}

impl FromStr for EnergyClass {
    type Err = RecordError;

    /// Labels are case-sensitive: "a+" is not "A+".
    fn from_str(s: &str) -> Result<Self> {
        match_choice("energy_class", s, &Self::ALL, Self::as_str, false)
    }
}

impl fmt::Display for EnergyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplianceColor {
    White,
    Black,
    Silver,
    Grey,
    StainlessSteel,
    Red,
    Blue,
}

impl ApplianceColor {
    pub const ALL: [ApplianceColor; 7] = [
        ApplianceColor::White,
        ApplianceColor::Black,
        ApplianceColor::Silver,
        ApplianceColor::Grey,
        ApplianceColor::StainlessSteel,
        ApplianceColor::Red,
        ApplianceColor::Blue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplianceColor::White => "Blanco",
            ApplianceColor::Black => "Negro",
            ApplianceColor::Silver => "Plateado",
            ApplianceColor::Grey => "Gris",
            ApplianceColor::StainlessSteel => "Acero Inoxidable",
            ApplianceColor::Red => "Rojo",
            ApplianceColor::Blue => "Azul",
        }
    }
}

impl FromStr for ApplianceColor {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        match_choice("color", s, &Self::ALL, Self::as_str, true)
    }
}

impl fmt::Display for ApplianceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceFields {
    pub brand: String,
    pub model: String,
    pub capacity_litres: f64,
    pub has_freezer: bool,
    pub energy_class: String,
    pub price: Decimal,
    pub manufacture_date: NaiveDate,
    pub warranty_months: u32,
    pub color: String,
}

pub mod rules {
    use super::*;
    use crate::utils::validation::{
        reject, round_to_tenth, validate_finite, validate_past_date, validate_price,
        validate_range, validate_text,
    };

    pub fn brand(raw: &str) -> Result<String> {
        validate_text("brand", raw, BRAND_MAX_LEN)
    }

    pub fn model(raw: &str) -> Result<String> {
        validate_text("model", raw, MODEL_MAX_LEN)
    }

    /// Must stay strictly positive after rounding to one decimal.
    pub fn capacity_litres(litres: f64) -> Result<f64> {
        validate_finite("capacity_litres", litres)?;
        if litres <= 0.0 {
            return Err(reject(
                "capacity_litres",
                litres,
                "Capacity must be greater than 0 litres",
            ));
        }
        if litres > MAX_CAPACITY_LITRES {
            return Err(reject(
                "capacity_litres",
                litres,
                "Capacity cannot exceed 1000 litres",
            ));
        }
        let rounded = round_to_tenth(litres);
        if rounded <= 0.0 {
            return Err(reject(
                "capacity_litres",
                litres,
                "Capacity must be at least 0.1 litres",
            ));
        }
        Ok(rounded)
    }

    pub fn energy_class(raw: &str) -> Result<EnergyClass> {
        raw.parse()
    }

    pub fn price(price: Decimal) -> Result<Decimal> {
        validate_price("price", price, MAX_PRICE)
    }

    pub fn manufacture_date(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
        validate_past_date("manufacture_date", date, today, MIN_MANUFACTURE_YEAR)?;
        Ok(date)
    }

    pub fn warranty_months(months: u32) -> Result<u32> {
        validate_range(
            "warranty_months",
            months,
            MIN_WARRANTY_MONTHS,
            MAX_WARRANTY_MONTHS,
        )?;
        Ok(months)
    }

    pub fn color(raw: &str) -> Result<ApplianceColor> {
        raw.parse()
    }
}

/// A refrigerator whose fields are valid for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceRecord<C: Clock = SystemClock> {
    brand: String,
    model: String,
    capacity_litres: f64,
    has_freezer: bool,
    energy_class: EnergyClass,
    price: Decimal,
    manufacture_date: NaiveDate,
    warranty_months: u32,
    color: ApplianceColor,
    clock: C,
}

impl Default for ApplianceRecord<SystemClock> {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl ApplianceRecord<SystemClock> {
    pub fn try_new(fields: ApplianceFields) -> Result<Self> {
        Self::try_new_with_clock(fields, SystemClock)
    }
}

impl<C: Clock> ApplianceRecord<C> {
    /// Sentinel instance made six months ago, never earlier than 2010-01-01.
    pub fn with_clock(clock: C) -> Self {
        let today = clock.today();
        let manufacture_date = today
            .checked_sub_months(Months::new(6))
            .unwrap_or(today)
            .max(first_day_of(MIN_MANUFACTURE_YEAR));
        Self {
            brand: "Genérica".to_string(),
            model: "Estándar".to_string(),
            capacity_litres: 350.0,
            has_freezer: true,
            energy_class: EnergyClass::APlus,
            price: Decimal::new(59_999, 2),
            manufacture_date,
            warranty_months: 24,
            color: ApplianceColor::White,
            clock,
        }
    }

    pub fn try_new_with_clock(fields: ApplianceFields, clock: C) -> Result<Self> {
        let today = clock.today();
        let record = Self {
            brand: rules::brand(&fields.brand)?,
            model: rules::model(&fields.model)?,
            capacity_litres: rules::capacity_litres(fields.capacity_litres)?,
            has_freezer: fields.has_freezer,
            energy_class: rules::energy_class(&fields.energy_class)?,
            price: rules::price(fields.price)?,
            manufacture_date: rules::manufacture_date(fields.manufacture_date, today)?,
            warranty_months: rules::warranty_months(fields.warranty_months)?,
            color: rules::color(&fields.color)?,
            clock,
        };
        tracing::debug!(brand = %record.brand, model = %record.model, "appliance record created");
        Ok(record)
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn set_brand(&mut self, brand: &str) -> Result<()> {
        self.brand = rules::brand(brand)?;
        tracing::trace!(field = "brand", value = %self.brand, "updated");
        Ok(())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: &str) -> Result<()> {
        self.model = rules::model(model)?;
        tracing::trace!(field = "model", value = %self.model, "updated");
        Ok(())
    }

    pub fn capacity_litres(&self) -> f64 {
        self.capacity_litres
    }

    pub fn set_capacity_litres(&mut self, litres: f64) -> Result<()> {
        self.capacity_litres = rules::capacity_litres(litres)?;
        tracing::trace!(field = "capacity_litres", value = self.capacity_litres, "updated");
        Ok(())
    }

    pub fn has_freezer(&self) -> bool {
        self.has_freezer
    }

    pub fn set_has_freezer(&mut self, has_freezer: bool) {
        self.has_freezer = has_freezer;
    }

    pub fn energy_class(&self) -> EnergyClass {
        self.energy_class
    }

    pub fn set_energy_class(&mut self, energy_class: &str) -> Result<()> {
        self.energy_class = rules::energy_class(energy_class)?;
        tracing::trace!(field = "energy_class", value = %self.energy_class, "updated");
        Ok(())
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_price(&mut self, price: Decimal) -> Result<()> {
        self.price = rules::price(price)?;
        tracing::trace!(field = "price", value = %self.price, "updated");
        Ok(())
    }

    pub fn manufacture_date(&self) -> NaiveDate {
        self.manufacture_date
    }

    pub fn set_manufacture_date(&mut self, date: NaiveDate) -> Result<()> {
        self.manufacture_date = rules::manufacture_date(date, self.clock.today())?;
        tracing::trace!(field = "manufacture_date", value = %self.manufacture_date, "updated");
        Ok(())
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }

    pub fn set_warranty_months(&mut self, months: u32) -> Result<()> {
        self.warranty_months = rules::warranty_months(months)?;
        tracing::trace!(field = "warranty_months", value = self.warranty_months, "updated");
        Ok(())
    }

    pub fn color(&self) -> ApplianceColor {
        self.color
    }

    pub fn set_color(&mut self, color: &str) -> Result<()> {
        self.color = rules::color(color)?;
        tracing::trace!(field = "color", value = %self.color, "updated");
        Ok(())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl<C: Clock> fmt::Display for ApplianceRecord<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appliance [Brand: {}, Model: {}, Capacity: {:.1} L, Freezer: {}, \
             Energy class: {}, Price: ${}, Manufactured: {}, Warranty: {} months, Color: {}]",
            self.brand,
            self.model,
            self.capacity_litres,
            if self.has_freezer { "Yes" } else { "No" },
            self.energy_class,
            self.price,
            self.manufacture_date,
            self.warranty_months,
            self.color
        )
    }
}
