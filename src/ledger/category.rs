use once_cell::sync::Lazy;

/// A fixed classification tag attached to expenses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

impl Category {
    /// Decodes the `#RRGGBB` swatch color. `None` for malformed entries.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((red, green, blue))
    }
}

/// The static expense taxonomy, in display order.
pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category {
            key: "purchases",
            name: "Compras",
            color: "#5636D3",
        },
        Category {
            key: "food",
            name: "Alimentação",
            color: "#FF872C",
        },
        Category {
            key: "salary",
            name: "Salário",
            color: "#12A454",
        },
        Category {
            key: "car",
            name: "Carro",
            color: "#E83F5B",
        },
        Category {
            key: "leisure",
            name: "Lazer",
            color: "#26195C",
        },
        Category {
            key: "studies",
            name: "Estudos",
            color: "#9C001A",
        },
    ]
});

pub fn category_by_key(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.key == key)
}
