use serde::{Deserialize, Serialize};

/// Top-level inventory view currently selected.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    #[default]
    Products,
    Orders,
    Suppliers,
    Outputs,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Products,
        ActiveTab::Orders,
        ActiveTab::Suppliers,
        ActiveTab::Outputs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveTab::Products => "products",
            ActiveTab::Orders => "orders",
            ActiveTab::Suppliers => "suppliers",
            ActiveTab::Outputs => "outputs",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ActiveTab::Products => "Produtos",
            ActiveTab::Orders => "Compras",
            ActiveTab::Suppliers => "Fornecedores",
            ActiveTab::Outputs => "Saídas",
        }
    }
}

impl core::str::FromStr for ActiveTab {
    type Err = stockroom_core::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActiveTab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| stockroom_core::DomainError::validation(format!("unknown tab: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_products() {
        assert_eq!(ActiveTab::default(), ActiveTab::Products);
    }

    #[test]
    fn parses_wire_names() {
        for tab in ActiveTab::ALL {
            assert_eq!(tab.as_str().parse::<ActiveTab>().unwrap(), tab);
        }
        assert!("inventory".parse::<ActiveTab>().is_err());
    }
}
