use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{first_day_of, match_choice};
use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

pub const BRAND_MAX_LEN: usize = 30;
pub const MODEL_MAX_LEN: usize = 50;
pub const COLOR_MAX_LEN: usize = 20;
pub const MIN_YEAR: i32 = 1990;
pub const MAX_ODOMETER_KM: f64 = 1_000_000.0;
/// Below this reading a vehicle counts as new.
pub const NEW_VEHICLE_KM: f64 = 1_000.0;
pub const MAX_PRICE: Decimal = Decimal::from_parts(500_000, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
    NaturalGas,
    Hydrogen,
}

impl FuelType {
    pub const ALL: [FuelType; 6] = [
        FuelType::Gasoline,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
        FuelType::NaturalGas,
        FuelType::Hydrogen,
    ];

    /// Canonical spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "Gasolina",
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Eléctrico",
            FuelType::Hybrid => "Híbrido",
            FuelType::NaturalGas => "Gas Natural",
            FuelType::Hydrogen => "Hidrógeno",
        }
    }
}

impl FromStr for FuelType {
    type Err = RecordError;

    /// Case-insensitive match against the canonical spellings.
    fn from_str(s: &str) -> Result<Self> {
        match_choice("fuel_type", s, &Self::ALL, Self::as_str, true)
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values for a full construction, validated in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleFields {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: String,
    pub odometer_km: f64,
    pub fuel_type: String,
    pub price: Decimal,
    pub automatic: bool,
    pub registration_date: NaiveDate,
    pub color: String,
}

/// Per-field acceptance and normalisation rules. Construction and every
/// setter go through these functions and nothing else.
pub mod rules {
    use super::*;
    use crate::utils::validation::{
        reject, round_to_tenth, validate_finite, validate_non_empty_string, validate_past_date,
        validate_price, validate_text,
    };

    pub fn brand(raw: &str) -> Result<String> {
        validate_text("brand", raw, BRAND_MAX_LEN)
    }

    pub fn model(raw: &str) -> Result<String> {
        validate_text("model", raw, MODEL_MAX_LEN)
    }

    /// Next year's models are allowed.
    pub fn year(year: i32, today: NaiveDate) -> Result<i32> {
        let latest = today.year() + 1;
        if year < MIN_YEAR {
            return Err(reject(
                "year",
                year,
                format!("Year cannot be earlier than {}", MIN_YEAR),
            ));
        }
        if year > latest {
            return Err(reject(
                "year",
                year,
                format!("Year cannot be later than {}", latest),
            ));
        }
        Ok(year)
    }

    /// Separators are ignored when checking the shape but kept in the
    /// stored value: "abc-123" is stored as "ABC-123".
    pub fn plate(raw: &str) -> Result<String> {
        validate_non_empty_string("plate", raw)?;
        let canonical = raw.trim().to_uppercase();
        let cleaned: Vec<char> = canonical
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        if !(5..=7).contains(&cleaned.len()) {
            return Err(reject(
                "plate",
                raw,
                "Plate must contain between 5 and 7 letters and digits",
            ));
        }

        let letters = cleaned.iter().filter(|c| c.is_ascii_alphabetic()).count();
        let digits = cleaned.iter().filter(|c| c.is_ascii_digit()).count();
        if letters < 3 || digits < 2 {
            return Err(reject(
                "plate",
                raw,
                "Plate must contain at least 3 letters and 2 digits",
            ));
        }

        Ok(canonical)
    }

    pub fn odometer_km(km: f64) -> Result<f64> {
        validate_finite("odometer_km", km)?;
        if km < 0.0 {
            return Err(reject("odometer_km", km, "Odometer reading cannot be negative"));
        }
        if km > MAX_ODOMETER_KM {
            return Err(reject(
                "odometer_km",
                km,
                "Odometer reading cannot exceed 1,000,000 km",
            ));
        }
        Ok(round_to_tenth(km))
    }

    pub fn fuel_type(raw: &str) -> Result<FuelType> {
        raw.parse()
    }

    pub fn price(price: Decimal) -> Result<Decimal> {
        validate_price("price", price, MAX_PRICE)
    }

    pub fn registration_date(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate> {
        validate_past_date("registration_date", date, today, MIN_YEAR)?;
        Ok(date)
    }

    pub fn color(raw: &str) -> Result<String> {
        validate_text("color", raw, COLOR_MAX_LEN)
    }
}

/// A vehicle whose fields are valid for its whole lifetime.
///
/// Setters either store the normalised value or return
/// [`RecordError::InvalidField`] and leave the record untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord<C: Clock = SystemClock> {
    brand: String,
    model: String,
    year: i32,
    plate: String,
    odometer_km: f64,
    fuel_type: FuelType,
    price: Decimal,
    automatic: bool,
    registration_date: NaiveDate,
    color: String,
    clock: C,
}

impl Default for VehicleRecord<SystemClock> {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl VehicleRecord<SystemClock> {
    pub fn try_new(fields: VehicleFields) -> Result<Self> {
        Self::try_new_with_clock(fields, SystemClock)
    }
}

impl<C: Clock> VehicleRecord<C> {
    /// Sentinel instance: a three-year-old petrol sedan registered two years ago.
    /// Year and registration date are held at the 1990 floor for early clocks.
    pub fn with_clock(clock: C) -> Self {
        let today = clock.today();
        let registration_date = today
            .checked_sub_months(Months::new(24))
            .unwrap_or(today)
            .max(first_day_of(MIN_YEAR));
        Self {
            brand: "Genérica".to_string(),
            model: "Sedán".to_string(),
            year: (today.year() - 3).max(MIN_YEAR),
            plate: "ABC-123".to_string(),
            odometer_km: 25_000.5,
            fuel_type: FuelType::Gasoline,
            price: Decimal::new(1_500_000, 2),
            automatic: true,
            registration_date,
            color: "Negro".to_string(),
            clock,
        }
    }

    /// Validates every field in order; the first rejection aborts construction.
    pub fn try_new_with_clock(fields: VehicleFields, clock: C) -> Result<Self> {
        let today = clock.today();
        let record = Self {
            brand: rules::brand(&fields.brand)?,
            model: rules::model(&fields.model)?,
            year: rules::year(fields.year, today)?,
            plate: rules::plate(&fields.plate)?,
            odometer_km: rules::odometer_km(fields.odometer_km)?,
            fuel_type: rules::fuel_type(&fields.fuel_type)?,
            price: rules::price(fields.price)?,
            automatic: fields.automatic,
            registration_date: rules::registration_date(fields.registration_date, today)?,
            color: rules::color(&fields.color)?,
            clock,
        };
        tracing::debug!(plate = %record.plate, "vehicle record created");
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

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) -> Result<()> {
        self.year = rules::year(year, self.clock.today())?;
        tracing::trace!(field = "year", value = self.year, "updated");
        Ok(())
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn set_plate(&mut self, plate: &str) -> Result<()> {
        self.plate = rules::plate(plate)?;
        tracing::trace!(field = "plate", value = %self.plate, "updated");
        Ok(())
    }

    pub fn odometer_km(&self) -> f64 {
        self.odometer_km
    }

    pub fn set_odometer_km(&mut self, km: f64) -> Result<()> {
        self.odometer_km = rules::odometer_km(km)?;
        tracing::trace!(field = "odometer_km", value = self.odometer_km, "updated");
        Ok(())
    }

    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    pub fn set_fuel_type(&mut self, fuel_type: &str) -> Result<()> {
        self.fuel_type = rules::fuel_type(fuel_type)?;
        tracing::trace!(field = "fuel_type", value = %self.fuel_type, "updated");
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

    pub fn is_automatic(&self) -> bool {
        self.automatic
    }

    pub fn set_automatic(&mut self, automatic: bool) {
        self.automatic = automatic;
    }

    pub fn registration_date(&self) -> NaiveDate {
        self.registration_date
    }

    pub fn set_registration_date(&mut self, date: NaiveDate) -> Result<()> {
        self.registration_date = rules::registration_date(date, self.clock.today())?;
        tracing::trace!(field = "registration_date", value = %self.registration_date, "updated");
        Ok(())
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: &str) -> Result<()> {
        self.color = rules::color(color)?;
        tracing::trace!(field = "color", value = %self.color, "updated");
        Ok(())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Years since the model year, against today's date at call time.
    pub fn age(&self) -> i32 {
        self.clock.today().year() - self.year
    }

    pub fn is_new(&self) -> bool {
        self.odometer_km < NEW_VEHICLE_KM
    }

    pub fn transmission(&self) -> &'static str {
        if self.automatic {
            "Automatic"
        } else {
            "Manual"
        }
    }

    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl<C: Clock> fmt::Display for VehicleRecord<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vehicle [Brand: {}, Model: {}, Year: {}, Plate: {}, Odometer: {:.1} km, \
             Fuel: {}, Price: ${}, Transmission: {}, Registered: {}, Color: {}, Age: {} years]",
            self.brand,
            self.model,
            self.year,
            self.plate,
            self.odometer_km,
            self.fuel_type,
            self.price,
            self.transmission(),
            self.registration_date,
            self.color,
            self.age()
        )
    }
}
