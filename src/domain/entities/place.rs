//! Place entity and its serialized form.

use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use super::{Amenity, Entity, Metadata, Record, Review, User};
use crate::domain::validation::{self, ValidationError, ValidationResult};

/// A rentable property.
///
/// The owner, amenities and reviews are referenced by id. The lists only grow
/// through [`Place::add_amenity`] and [`Place::add_review`].
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    meta: Metadata,
    title: String,
    description: String,
    price: f64,
    latitude: f64,
    longitude: f64,
    owner_id: Uuid,
    amenities: Vec<Uuid>,
    reviews: Vec<Uuid>,
}

impl Place {
    /// Validates the input and assigns a new identity.
    ///
    /// The owner must already have been resolved by the caller.
    pub fn new(input: NewPlace) -> ValidationResult<Self> {
        let place = Self {
            meta: Metadata::new(),
            title: input.title,
            description: input.description,
            price: input.price,
            latitude: input.latitude,
            longitude: input.longitude,
            owner_id: input.owner_id,
            amenities: Vec::new(),
            reviews: Vec::new(),
        };
        place.validate()?;
        Ok(place)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn amenity_ids(&self) -> &[Uuid] {
        &self.amenities
    }

    pub fn review_ids(&self) -> &[Uuid] {
        &self.reviews
    }

    /// Appends an amenity. Returns `false` if it was already attached.
    pub fn add_amenity(&mut self, amenity_id: Uuid) -> bool {
        if self.amenities.contains(&amenity_id) {
            return false;
        }
        self.amenities.push(amenity_id);
        self.meta.touch();
        true
    }

    /// Appends a review. Returns `false` if it was already attached.
    pub fn add_review(&mut self, review_id: Uuid) -> bool {
        if self.reviews.contains(&review_id) {
            return false;
        }
        self.reviews.push(review_id);
        self.meta.touch();
        true
    }

    /// Applies a partial update. On error the place is left unchanged.
    pub fn apply(&mut self, patch: PlacePatch) -> ValidationResult {
        let mut candidate = self.clone();
        if let Some(title) = patch.title {
            candidate.title = title;
        }
        if let Some(description) = patch.description {
            candidate.description = description;
        }
        if let Some(price) = patch.price {
            candidate.price = price;
        }
        if let Some(latitude) = patch.latitude {
            candidate.latitude = latitude;
        }
        if let Some(longitude) = patch.longitude {
            candidate.longitude = longitude;
        }
        candidate.validate()?;
        candidate.meta.touch();
        *self = candidate;
        Ok(())
    }

    /// Builds the serialized form from already-resolved relations.
    pub fn to_record(
        &self,
        owner: Option<User>,
        amenities: Vec<Amenity>,
        reviews: Vec<Review>,
    ) -> PlaceRecord {
        PlaceRecord {
            meta: self.meta.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            latitude: self.latitude,
            longitude: self.longitude,
            owner_id: self.owner_id,
            owner: owner.map(|user| Box::new(Record::User(user))),
            amenities: amenities.into_iter().map(Record::Amenity).collect(),
            reviews: reviews.into_iter().map(Record::Review).collect(),
        }
    }

    fn validate(&self) -> ValidationResult {
        validation::not_blank("title", &self.title, "Title")?;
        validation::max_chars("title", &self.title, 100, "Title")?;
        if self.price.is_nan() || self.price < 0.0 {
            return Err(ValidationError::new("price", "Price must be positive"));
        }
        validation::in_range("latitude", self.latitude, -90.0, 90.0, "Latitude")?;
        validation::in_range("longitude", self.longitude, -180.0, 180.0, "Longitude")
    }
}

impl Entity for Place {
    const KIND: &'static str = "Place";

    fn metadata(&self) -> &Metadata {
        &self.meta
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "title" => Some(json!(self.title)),
            "description" => Some(json!(self.description)),
            "price" => Some(json!(self.price)),
            "latitude" => Some(json!(self.latitude)),
            "longitude" => Some(json!(self.longitude)),
            "owner_id" => Some(json!(self.owner_id)),
            "amenities" => Some(json!(self.amenities)),
            "reviews" => Some(json!(self.reviews)),
            _ => self.meta.attribute(name),
        }
    }
}

/// Serialized place with its relations nested as records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceRecord {
    #[serde(flatten)]
    pub meta: Metadata,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
    pub owner: Option<Box<Record>>,
    pub amenities: Vec<Record>,
    pub reviews: Vec<Record>,
}

/// Input data for creating a new place.
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
}

/// Partial update for an existing place. The owner cannot be changed.
#[derive(Debug, Clone, Default)]
pub struct PlacePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewAmenity, NewUser};

    fn villa(latitude: f64, longitude: f64) -> NewPlace {
        NewPlace {
            title: "Test Villa".to_string(),
            description: "Luxury villa".to_string(),
            price: 300.0,
            latitude,
            longitude,
            owner_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_place_creation() {
        let place = Place::new(villa(40.0, -70.0)).unwrap();

        assert_eq!(place.title(), "Test Villa");
        assert_eq!(place.price(), 300.0);
        assert!(place.amenity_ids().is_empty());
        assert!(place.review_ids().is_empty());
    }

    #[test]
    fn test_coordinate_boundaries_accepted() {
        for (lat, lon) in [(-90.0, -180.0), (90.0, 180.0), (0.0, 0.0)] {
            assert!(Place::new(villa(lat, lon)).is_ok(), "({lat}, {lon})");
        }
    }

    #[test]
    fn test_coordinates_out_of_range() {
        assert_eq!(Place::new(villa(90.5, 0.0)).unwrap_err().field, "latitude");
        assert_eq!(Place::new(villa(-91.0, 0.0)).unwrap_err().field, "latitude");
        assert_eq!(Place::new(villa(0.0, 180.1)).unwrap_err().field, "longitude");
        assert_eq!(Place::new(villa(0.0, -200.0)).unwrap_err().field, "longitude");
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Place::new(NewPlace {
            price: -50.0,
            ..villa(0.0, 0.0)
        })
        .unwrap_err();
        assert_eq!(err.message, "Price must be positive");

        assert!(
            Place::new(NewPlace {
                price: 0.0,
                ..villa(0.0, 0.0)
            })
            .is_ok()
        );
    }

    #[test]
    fn test_title_length_limit() {
        let long = NewPlace {
            title: "t".repeat(101),
            ..villa(0.0, 0.0)
        };
        assert_eq!(Place::new(long).unwrap_err().field, "title");
    }

    #[test]
    fn test_blank_title_rejected_on_create_and_update() {
        let blank = NewPlace {
            title: " ".to_string(),
            ..villa(0.0, 0.0)
        };
        assert_eq!(Place::new(blank).unwrap_err().field, "title");

        let mut place = Place::new(villa(0.0, 0.0)).unwrap();
        let before = place.clone();
        let err = place
            .apply(PlacePatch {
                title: Some(String::new()),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err.message, "Title cannot be empty");
        assert_eq!(place, before);
    }

    #[test]
    fn test_add_amenity_and_review_append_in_order() {
        let mut place = Place::new(villa(0.0, 0.0)).unwrap();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        assert!(place.add_amenity(a));
        assert!(place.add_amenity(b));
        assert!(!place.add_amenity(a));
        assert_eq!(place.amenity_ids(), &[a, b]);

        let review = Uuid::new_v4();
        assert!(place.add_review(review));
        assert_eq!(place.review_ids(), &[review]);
    }

    #[test]
    fn test_rejected_patch_leaves_place_unchanged() {
        let mut place = Place::new(villa(10.0, 10.0)).unwrap();
        let before = place.clone();

        assert!(
            place
                .apply(PlacePatch {
                    title: Some("Renamed".to_string()),
                    latitude: Some(120.0),
                    ..Default::default()
                })
                .is_err()
        );
        assert_eq!(place, before);

        place
            .apply(PlacePatch {
                price: Some(150.0),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(place.price(), 150.0);
        assert_eq!(place.title(), "Test Villa");
    }

    #[test]
    fn test_record_nests_relations() {
        let owner = User::new(NewUser {
            first_name: "Postman".to_string(),
            last_name: "Test".to_string(),
            email: "postman@test.com".to_string(),
            is_admin: false,
        })
        .unwrap();
        let pool = Amenity::new(NewAmenity {
            name: "Swimming Pool".to_string(),
        })
        .unwrap();

        let mut place = Place::new(NewPlace {
            owner_id: owner.id(),
            ..villa(40.0, -70.0)
        })
        .unwrap();
        place.add_amenity(pool.id());

        let record = Record::Place(place.to_record(Some(owner), vec![pool], Vec::new()));
        let json = record.to_json().unwrap();

        assert_eq!(json["__class__"], "Place");
        assert_eq!(json["owner"]["__class__"], "User");
        assert_eq!(json["owner"]["email"], "postman@test.com");
        assert_eq!(json["amenities"][0]["name"], "Swimming Pool");
        assert_eq!(json["reviews"].as_array().unwrap().len(), 0);
        assert_eq!(record.to_json().unwrap(), json);
    }
}
