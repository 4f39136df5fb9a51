// Builder: a director drives form builders through a fixed step order,
// plus a plain fluent builder for a person record.

use std::io::Write;

use crate::error::Result;

// ============================================================================
// Director-driven builder
// ============================================================================

/// Product accumulated by a [`FormBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataBiller {
    pub title_biller: String,
    pub have_tnc: bool,
    pub is_enabled: bool,
    pub index_sof: u32,
}

pub trait FormBuilder {
    fn required_data_biller(&self) -> &DataBiller;
    fn build_text_input_view(&mut self);
    fn build_text_view(&mut self);
    fn build_tnc_view(&mut self);
    fn build_sof_view(&mut self);
    fn build_button_next_view(&mut self);
}

#[derive(Debug, Default)]
pub struct PaymentFormBuilder {
    data_biller: DataBiller,
}

impl PaymentFormBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormBuilder for PaymentFormBuilder {
    fn required_data_biller(&self) -> &DataBiller {
        &self.data_biller
    }

    fn build_text_input_view(&mut self) {
        self.data_biller.title_biller = "Input your number bill".to_string();
    }

    fn build_text_view(&mut self) {
        self.data_biller.title_biller = "Here your bill".to_string();
    }

    fn build_tnc_view(&mut self) {
        self.data_biller.have_tnc = true;
    }

    fn build_sof_view(&mut self) {
        self.data_biller.index_sof = 1;
    }

    fn build_button_next_view(&mut self) {
        self.data_biller.is_enabled = false;
    }
}

#[derive(Debug, Default)]
pub struct PurchaseFormBuilder {
    data_biller: DataBiller,
}

impl PurchaseFormBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormBuilder for PurchaseFormBuilder {
    fn required_data_biller(&self) -> &DataBiller {
        &self.data_biller
    }

    fn build_text_input_view(&mut self) {
        self.data_biller.title_biller = "Input your topup number".to_string();
    }

    fn build_text_view(&mut self) {
        self.data_biller.title_biller = "Here your nominal of top up".to_string();
    }

    fn build_tnc_view(&mut self) {
        self.data_biller.have_tnc = true;
    }

    fn build_sof_view(&mut self) {
        self.data_biller.index_sof = 1;
    }

    fn build_button_next_view(&mut self) {
        self.data_biller.is_enabled = true;
    }
}

pub struct FormDirector;

impl FormDirector {
    /// The step order is fixed; the text input title overwrites the text view title.
    pub fn construct(&self, builder: &mut dyn FormBuilder) {
        builder.build_sof_view();
        builder.build_text_view();
        builder.build_text_input_view();
        builder.build_tnc_view();
        builder.build_button_next_view();
    }
}

// ============================================================================
// Fluent builder
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub address: String,
    pub email: String,
}

#[derive(Debug, Default)]
pub struct PersonBuilder {
    name: String,
    age: u32,
    address: Option<String>,
    email: Option<String>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn build(self) -> Person {
        Person {
            name: self.name,
            age: self.age,
            address: self.address.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        }
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let director = FormDirector;

    let mut form_payment_builder = PaymentFormBuilder::new();
    director.construct(&mut form_payment_builder);
    let form_payment = form_payment_builder.required_data_biller();
    writeln!(out, "Form Payment: {form_payment:?}")?;

    let mut form_purchase_builder = PurchaseFormBuilder::new();
    director.construct(&mut form_purchase_builder);
    let form_purchase = form_purchase_builder.required_data_biller();
    writeln!(out, "Form Purchase: {form_purchase:?}")?;

    let person = PersonBuilder::new()
        .name("Feny")
        .age(24)
        .address("World")
        .email("feny@teknologi.ai")
        .build();
    writeln!(out, "{person:?}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the order in which the director calls the steps.
    #[derive(Default)]
    struct RecordingBuilder {
        data_biller: DataBiller,
        calls: Vec<&'static str>,
    }

    impl FormBuilder for RecordingBuilder {
        fn required_data_biller(&self) -> &DataBiller {
            &self.data_biller
        }
        fn build_text_input_view(&mut self) {
            self.calls.push("text_input");
        }
        fn build_text_view(&mut self) {
            self.calls.push("text");
        }
        fn build_tnc_view(&mut self) {
            self.calls.push("tnc");
        }
        fn build_sof_view(&mut self) {
            self.calls.push("sof");
        }
        fn build_button_next_view(&mut self) {
            self.calls.push("button_next");
        }
    }

    #[test]
    fn test_director_step_order() {
        let mut builder = RecordingBuilder::default();
        FormDirector.construct(&mut builder);
        assert_eq!(builder.calls, vec!["sof", "text", "text_input", "tnc", "button_next"]);
    }

    #[test]
    fn test_payment_form() {
        let mut builder = PaymentFormBuilder::new();
        FormDirector.construct(&mut builder);
        assert_eq!(
            builder.required_data_biller(),
            &DataBiller {
                title_biller: "Input your number bill".to_string(),
                have_tnc: true,
                is_enabled: false,
                index_sof: 1,
            }
        );
    }

    #[test]
    fn test_purchase_form() {
        let mut builder = PurchaseFormBuilder::new();
        FormDirector.construct(&mut builder);
        let form = builder.required_data_biller();
        assert_eq!(form.title_biller, "Input your topup number");
        assert!(form.is_enabled);
    }

    #[test]
    fn test_untouched_builder_has_defaults() {
        assert_eq!(PaymentFormBuilder::new().required_data_biller(), &DataBiller::default());
    }

    #[test]
    fn test_person_builder_fills_missing_optionals() {
        let person = PersonBuilder::new().name("Ada").age(36).build();
        assert_eq!(person.address, "");
        assert_eq!(person.email, "");
    }

    #[test]
    fn test_run_transcript() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            r#"Form Payment: DataBiller { title_biller: "Input your number bill", have_tnc: true, is_enabled: false, index_sof: 1 }"#
        );
        assert_eq!(
            lines[1],
            r#"Form Purchase: DataBiller { title_biller: "Input your topup number", have_tnc: true, is_enabled: true, index_sof: 1 }"#
        );
        assert_eq!(
            lines[2],
            r#"Person { name: "Feny", age: 24, address: "World", email: "feny@teknologi.ai" }"#
        );
    }
}
