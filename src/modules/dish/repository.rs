use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::{fmt, io, path::Path};
use tokio::sync::{Mutex, MutexGuard};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
    /// Caller-supplied fields with no dedicated slot, kept as given on create.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dish {
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(fields))
    }

    /// Every field name the dish currently carries, mapped to its value.
    pub fn fields(&self) -> Map<String, Value> {
        let mut fields = self.extra.clone();
        fields.insert(String::from("id"), Value::String(self.id.clone()));
        fields.insert(String::from("name"), Value::String(self.name.clone()));
        fields.insert(
            String::from("description"),
            Value::String(self.description.clone()),
        );
        fields.insert(String::from("price"), Value::Number(self.price.clone()));
        fields.insert(
            String::from("image_url"),
            Value::String(self.image_url.clone()),
        );
        fields
    }
}

/// Ordered dish collection. Append order is the only ordering kept.
#[derive(Debug, Default)]
pub struct Dishes {
    items: Vec<Dish>,
}

impl Dishes {
    pub fn new(items: Vec<Dish>) -> Self {
        Self { items }
    }

    pub fn append(&mut self, dish: Dish) {
        self.items.push(dish);
    }

    pub fn enumerate(&self) -> &[Dish] {
        &self.items
    }

    // Linear scan; swap for an id index if the catalog grows.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|dish| dish.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Dish> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Dish> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Process-wide store. Holding the guard serializes dish requests.
#[derive(Debug, Default)]
pub struct DishStore {
    dishes: Mutex<Dishes>,
}

impl DishStore {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self {
            dishes: Mutex::new(Dishes::new(dishes)),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, Dishes> {
        self.dishes.lock().await
    }
}

#[derive(Debug)]
pub enum SeedError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read seed file: {}", err),
            Self::Parse(err) => write!(f, "failed to parse seed file: {}", err),
        }
    }
}

impl std::error::Error for SeedError {}

pub async fn load_seed(path: &Path) -> Result<Vec<Dish>, SeedError> {
    let raw = tokio::fs::read(path).await.map_err(SeedError::Io)?;
    serde_json::from_slice::<Vec<Dish>>(&raw).map_err(SeedError::Parse)
}
