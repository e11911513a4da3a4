use super::Serializer;

/// SQL dialect rendered by a [`Serializer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Flavor::Postgresql)
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Flavor::Mysql)
    }
}
