use heck::ToSnakeCase;

#[derive(Debug)]
pub(crate) struct Name {
    /// snake_case form of the identifier
    pub(crate) snake: String,
}

impl Name {
    pub(crate) fn from_ident(ident: &syn::Ident) -> Self {
        Self::from_str(&ident.to_string())
    }

    pub(crate) fn from_str(src: &str) -> Self {
        let src = src.strip_prefix("r#").unwrap_or(src);
        Self {
            snake: src.to_snake_case(),
        }
    }

    /// Default table name: the plural of the snake_case name.
    pub(crate) fn table(&self) -> String {
        // Only the last word is pluralized: `user_profile` -> `user_profiles`
        match self.snake.rsplit_once('_') {
            Some((head, last)) => format!("{head}_{}", pluralizer::pluralize(last, 2, false)),
            None => pluralizer::pluralize(&self.snake, 2, false),
        }
    }
}
