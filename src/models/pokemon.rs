use serde_json::Value;

/// Shown in place of any field the API omitted or mistyped.
pub const MISSING: &str = "na";

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub name: String,
    pub base_stat: Option<u32>,
}

impl Stat {
    /// Abbreviation used under the chart bars.
    pub fn short_label(&self) -> &str {
        match self.name.as_str() {
            "hp" => "HP",
            "attack" => "ATK",
            "defense" => "DEF",
            "special-attack" => "SpA",
            "special-defense" => "SpD",
            "speed" => "SPD",
            other => other,
        }
    }

    /// "special-attack" -> "Special Attack"
    pub fn title(&self) -> String {
        self.name
            .split(|c: char| c == '-' || c == ' ')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One card's worth of data, coerced from a raw `/pokemon/{id}` document.
#[derive(Debug, Clone, PartialEq)]
pub struct Pokemon {
    pub id: Option<u32>,
    pub name: String,
    pub types: Vec<String>,
    pub sprite_front: Option<String>,
    pub sprite_back: Option<String>,
    /// Decimetres
    pub height: Option<u32>,
    /// Hectograms
    pub weight: Option<u32>,
    pub stats: Vec<Stat>,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
}

impl Pokemon {
    /// Never fails: fields that are missing or of the wrong type become
    /// [`MISSING`], `None`, or an empty list.
    pub fn from_json(value: &Value) -> Self {
        let sprites = value.get("sprites");
        let sprite_front = sprites.and_then(|s| string_at(s, "front_default"));
        let sprite_back = sprites
            .and_then(|s| string_at(s, "back_default"))
            .or_else(|| sprite_front.clone());

        Self {
            id: number_at(value, "id"),
            name: string_at(value, "name").unwrap_or_else(|| MISSING.to_string()),
            types: named_list(value, "types", "type"),
            sprite_front,
            sprite_back,
            height: number_at(value, "height"),
            weight: number_at(value, "weight"),
            stats: stats(value),
            abilities: named_list(value, "abilities", "ability"),
            moves: named_list(value, "moves", "move"),
        }
    }

    pub fn id_label(&self) -> String {
        match self.id {
            Some(id) => format!("#{}", id),
            None => format!("#{}", MISSING),
        }
    }

    pub fn height_label(&self) -> String {
        match self.height {
            Some(dm) => format!("{} cm", u64::from(dm) * 10),
            None => MISSING.to_string(),
        }
    }

    pub fn weight_label(&self) -> String {
        match self.weight {
            Some(hg) => format!("{:.1} kg", f64::from(hg) / 10.0),
            None => MISSING.to_string(),
        }
    }

    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Second type, or the first for single-typed records.
    pub fn secondary_type(&self) -> Option<&str> {
        self.types.get(1).or(self.types.first()).map(String::as_str)
    }
}

fn string_at(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn number_at(value: &Value, key: &str) -> Option<u32> {
    value
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

/// Collect `list[*][inner].name`; any malformed element empties the whole list.
fn named_list(value: &Value, list: &str, inner: &str) -> Vec<String> {
    let Some(items) = value.get(list).and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| item.get(inner).and_then(|i| string_at(i, "name")))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}

fn stats(value: &Value) -> Vec<Stat> {
    let Some(items) = value.get("stats").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            let name = item.get("stat").and_then(|s| string_at(s, "name"))?;
            Some(Stat {
                name,
                base_stat: number_at(item, "base_stat"),
            })
        })
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default()
}
