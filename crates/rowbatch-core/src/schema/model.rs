use super::Field;

/// Static description of a record type: the table it maps to and its
/// fields, in declaration order.
///
/// Generated by `#[derive(Record)]`.
#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the Rust struct
    pub name: &'static str,

    /// Table the records are written to
    pub table: String,

    /// All struct fields, including the ones that never reach the database
    pub fields: Vec<Field>,
}

impl Model {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields that make up the primary key
    pub fn primary_key(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.primary_key)
    }

    /// Column of the first primary key field, if any.
    pub fn primary_key_column(&self) -> Option<&str> {
        self.primary_key().next().map(|field| &field.column[..])
    }
}
