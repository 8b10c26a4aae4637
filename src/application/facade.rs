//! Catalog facade: the single entry point for cross-entity operations.

use serde::Serialize;
use serde_json::json;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::entities::{
    Amenity, AmenityPatch, Entity, NewAmenity, NewPlace, NewReview, NewUser, Place, PlacePatch,
    PlaceRecord, Record, Review, ReviewPatch, User, UserPatch,
};
use crate::domain::repositories::Repository;
use crate::domain::validation;
use crate::error::AppError;
use crate::infrastructure::persistence::InMemoryRepository;

/// What `create_place` does with amenity ids that do not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmenityPolicy {
    /// Drop unresolved ids silently.
    #[default]
    Skip,
    /// Fail the whole creation with [`AppError::InvalidInput`].
    Reject,
}

impl FromStr for AmenityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "reject" => Ok(Self::Reject),
            other => Err(format!("expected 'skip' or 'reject', got '{other}'")),
        }
    }
}

impl fmt::Display for AmenityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("skip"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

/// Place creation payload with unresolved references.
#[derive(Debug, Clone)]
pub struct PlaceInput {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: String,
    pub amenities: Vec<String>,
}

/// Review creation payload with unresolved references.
#[derive(Debug, Clone)]
pub struct ReviewInput {
    pub text: String,
    pub rating: i64,
    pub user_id: String,
    pub place_id: String,
}

/// Confirmation returned by the `delete_*` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deleted {
    pub kind: &'static str,
    pub id: Uuid,
}

impl Deleted {
    pub fn message(&self) -> String {
        format!("{} deleted successfully", self.kind)
    }
}

/// Number of stored entities per repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub users: usize,
    pub places: usize,
    pub reviews: usize,
    pub amenities: usize,
}

/// Orchestrates the four repositories.
///
/// Enforces the rules that span entities (owner and amenity existence, review
/// references, email uniqueness) before anything is written. Mutating
/// operations are serialized by an internal mutex; reads only take the
/// repositories' read locks.
pub struct HBnBFacade {
    users: Arc<dyn Repository<User>>,
    places: Arc<dyn Repository<Place>>,
    reviews: Arc<dyn Repository<Review>>,
    amenities: Arc<dyn Repository<Amenity>>,
    amenity_policy: AmenityPolicy,
    write_lock: Mutex<()>,
}

impl HBnBFacade {
    /// Creates a facade over the given repositories.
    pub fn new(
        users: Arc<dyn Repository<User>>,
        places: Arc<dyn Repository<Place>>,
        reviews: Arc<dyn Repository<Review>>,
        amenities: Arc<dyn Repository<Amenity>>,
        amenity_policy: AmenityPolicy,
    ) -> Self {
        Self {
            users,
            places,
            reviews,
            amenities,
            amenity_policy,
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a facade backed by fresh in-memory repositories.
    pub fn in_memory(amenity_policy: AmenityPolicy) -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            Arc::new(InMemoryRepository::new()),
            amenity_policy,
        )
    }

    pub fn amenity_policy(&self) -> AmenityPolicy {
        self.amenity_policy
    }

    // ── Users ───────────────────────────────────────────────────────────────

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if a name or the email is empty, or
    /// if the email is already registered.
    /// Returns [`AppError::Validation`] if the user violates an invariant.
    pub async fn create_user(&self, data: NewUser) -> Result<User, AppError> {
        require("first_name", &data.first_name)?;
        require("last_name", &data.last_name)?;
        require("email", &data.email)?;

        let _guard = self.write_lock.lock().await;

        if self.get_user_by_email(&data.email).await.is_some() {
            return Err(AppError::invalid_input(
                "Email already registered",
                json!({ "email": data.email }),
            ));
        }

        let user = self.users.add(User::new(data)?).await?;
        info!(user_id = %user.id(), "User created");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        find(self.users.as_ref(), id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users.get_by_attribute("email", &json!(email)).await
    }

    pub async fn get_all_users(&self) -> Vec<User> {
        self.users.get_all().await
    }

    /// Applies a partial update to a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::InvalidInput`] if the new email belongs to another user.
    /// Returns [`AppError::Validation`] if the result would violate an invariant.
    pub async fn update_user(&self, id: &str, patch: UserPatch) -> Result<User, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut user = find(self.users.as_ref(), id).await?;

        if let Some(email) = &patch.email
            && let Some(other) = self.get_user_by_email(email).await
            && other.id() != user.id()
        {
            return Err(AppError::invalid_input(
                "Email already registered",
                json!({ "email": email }),
            ));
        }

        user.apply(patch)?;
        let user = self.users.update(user).await?;
        info!(user_id = %user.id(), "User updated");
        Ok(user)
    }

    /// Removes a user. Places and reviews referencing it are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn delete_user(&self, id: &str) -> Result<Deleted, AppError> {
        let _guard = self.write_lock.lock().await;
        let user = find(self.users.as_ref(), id).await?;
        self.users.delete(user.id()).await?;
        info!(user_id = %user.id(), "User deleted");
        Ok(Deleted {
            kind: User::KIND,
            id: user.id(),
        })
    }

    // ── Places ──────────────────────────────────────────────────────────────

    /// Creates a place for an existing owner and attaches its amenities.
    ///
    /// Amenity ids that do not resolve are handled per [`AmenityPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the owner does not exist.
    /// Returns [`AppError::InvalidInput`] for an unresolved amenity under
    /// [`AmenityPolicy::Reject`].
    /// Returns [`AppError::Validation`] if the place violates an invariant.
    pub async fn create_place(&self, data: PlaceInput) -> Result<Place, AppError> {
        let _guard = self.write_lock.lock().await;

        let owner = lookup(self.users.as_ref(), &data.owner_id)
            .await
            .ok_or_else(|| {
                AppError::not_found(
                    "Owner user does not exist",
                    json!({ "owner_id": data.owner_id }),
                )
            })?;

        let mut amenity_ids = Vec::with_capacity(data.amenities.len());
        for raw in &data.amenities {
            match lookup(self.amenities.as_ref(), raw).await {
                Some(amenity) => amenity_ids.push(amenity.id()),
                None if self.amenity_policy == AmenityPolicy::Reject => {
                    return Err(AppError::invalid_input(
                        format!("Amenity {raw} does not exist"),
                        json!({ "amenity_id": raw }),
                    ));
                }
                None => debug!(amenity_id = %raw, "Skipping unresolved amenity"),
            }
        }

        let mut place = Place::new(NewPlace {
            title: data.title,
            description: data.description,
            price: data.price,
            latitude: data.latitude,
            longitude: data.longitude,
            owner_id: owner.id(),
        })?;
        for amenity_id in amenity_ids {
            place.add_amenity(amenity_id);
        }

        let place = self.places.add(place).await?;
        info!(
            place_id = %place.id(),
            owner_id = %owner.id(),
            amenities = place.amenity_ids().len(),
            "Place created"
        );
        Ok(place)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn get_place(&self, id: &str) -> Result<Place, AppError> {
        find(self.places.as_ref(), id).await
    }

    pub async fn get_all_places(&self) -> Vec<Place> {
        self.places.get_all().await
    }

    /// Applies a partial update to a place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Validation`] if the result would violate an invariant.
    pub async fn update_place(&self, id: &str, patch: PlacePatch) -> Result<Place, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut place = find(self.places.as_ref(), id).await?;
        place.apply(patch)?;
        let place = self.places.update(place).await?;
        info!(place_id = %place.id(), "Place updated");
        Ok(place)
    }

    /// Attaches an existing amenity to an existing place.
    ///
    /// Attaching an amenity that is already present leaves the place unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if either id does not resolve.
    pub async fn add_amenity_to_place(
        &self,
        place_id: &str,
        amenity_id: &str,
    ) -> Result<Place, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut place = find(self.places.as_ref(), place_id).await?;
        let amenity = find(self.amenities.as_ref(), amenity_id).await?;

        if !place.add_amenity(amenity.id()) {
            return Ok(place);
        }

        let place = self.places.update(place).await?;
        info!(place_id = %place.id(), amenity_id = %amenity.id(), "Amenity attached");
        Ok(place)
    }

    /// Removes a place. Its reviews stay in the review repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn delete_place(&self, id: &str) -> Result<Deleted, AppError> {
        let _guard = self.write_lock.lock().await;
        let place = find(self.places.as_ref(), id).await?;
        self.places.delete(place.id()).await?;
        info!(place_id = %place.id(), "Place deleted");
        Ok(Deleted {
            kind: Place::KIND,
            id: place.id(),
        })
    }

    // ── Reviews ─────────────────────────────────────────────────────────────

    /// Creates a review and appends it to its place.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the rating is outside 1..=5 or the
    /// text is blank.
    /// Returns [`AppError::NotFound`] if the user or the place does not exist.
    /// Returns [`AppError::Internal`] if the place cannot be updated after the
    /// review was stored.
    pub async fn create_review(&self, data: ReviewInput) -> Result<Review, AppError> {
        validation::rating(data.rating)?;

        let _guard = self.write_lock.lock().await;

        let user = lookup(self.users.as_ref(), &data.user_id)
            .await
            .ok_or_else(|| {
                AppError::not_found("User does not exist", json!({ "user_id": data.user_id }))
            })?;
        let mut place = lookup(self.places.as_ref(), &data.place_id)
            .await
            .ok_or_else(|| {
                AppError::not_found("Place does not exist", json!({ "place_id": data.place_id }))
            })?;

        let review = Review::new(NewReview {
            text: data.text,
            rating: data.rating,
            user_id: user.id(),
            place_id: place.id(),
        })?;

        let review = self.reviews.add(review).await?;
        place.add_review(review.id());
        if let Err(e) = self.places.update(place).await {
            error!(review_id = %review.id(), error = %e, "Failed to attach review to place");
            return Err(AppError::internal(
                "Review stored but could not be attached to its place",
                json!({ "review_id": review.id(), "reason": e.to_string() }),
            ));
        }

        info!(
            review_id = %review.id(),
            place_id = %review.place_id(),
            user_id = %review.user_id(),
            "Review created"
        );
        Ok(review)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn get_review(&self, id: &str) -> Result<Review, AppError> {
        find(self.reviews.as_ref(), id).await
    }

    pub async fn get_all_reviews(&self) -> Vec<Review> {
        self.reviews.get_all().await
    }

    /// Lists the reviews of a place in repository order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the place does not exist.
    pub async fn get_reviews_by_place(&self, place_id: &str) -> Result<Vec<Review>, AppError> {
        let place = find(self.places.as_ref(), place_id).await?;
        Ok(self
            .reviews
            .get_all()
            .await
            .into_iter()
            .filter(|review| review.place_id() == place.id())
            .collect())
    }

    /// Applies a partial update to a review; the rating is re-checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Validation`] if the result would violate an invariant.
    pub async fn update_review(&self, id: &str, patch: ReviewPatch) -> Result<Review, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut review = find(self.reviews.as_ref(), id).await?;
        review.apply(patch)?;
        let review = self.reviews.update(review).await?;
        info!(review_id = %review.id(), "Review updated");
        Ok(review)
    }

    /// Removes a review. The place keeps the id in its review list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn delete_review(&self, id: &str) -> Result<Deleted, AppError> {
        let _guard = self.write_lock.lock().await;
        let review = find(self.reviews.as_ref(), id).await?;
        self.reviews.delete(review.id()).await?;
        info!(review_id = %review.id(), "Review deleted");
        Ok(Deleted {
            kind: Review::KIND,
            id: review.id(),
        })
    }

    // ── Amenities ───────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank or too long.
    pub async fn create_amenity(&self, data: NewAmenity) -> Result<Amenity, AppError> {
        let amenity = Amenity::new(data)?;
        let _guard = self.write_lock.lock().await;
        let amenity = self.amenities.add(amenity).await?;
        info!(amenity_id = %amenity.id(), "Amenity created");
        Ok(amenity)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn get_amenity(&self, id: &str) -> Result<Amenity, AppError> {
        find(self.amenities.as_ref(), id).await
    }

    pub async fn get_all_amenities(&self) -> Vec<Amenity> {
        self.amenities.get_all().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    /// Returns [`AppError::Validation`] if the result would violate an invariant.
    pub async fn update_amenity(&self, id: &str, patch: AmenityPatch) -> Result<Amenity, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut amenity = find(self.amenities.as_ref(), id).await?;
        amenity.apply(patch)?;
        let amenity = self.amenities.update(amenity).await?;
        info!(amenity_id = %amenity.id(), "Amenity updated");
        Ok(amenity)
    }

    /// Removes an amenity. Places keep the id in their amenity list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn delete_amenity(&self, id: &str) -> Result<Deleted, AppError> {
        let _guard = self.write_lock.lock().await;
        let amenity = find(self.amenities.as_ref(), id).await?;
        self.amenities.delete(amenity.id()).await?;
        info!(amenity_id = %amenity.id(), "Amenity deleted");
        Ok(Deleted {
            kind: Amenity::KIND,
            id: amenity.id(),
        })
    }

    // ── Rendering ───────────────────────────────────────────────────────────

    /// Serializes a place with its owner, amenities and reviews resolved.
    ///
    /// References that no longer resolve are omitted; a deleted owner
    /// renders as `None`.
    pub async fn place_record(&self, place: &Place) -> PlaceRecord {
        let owner = self.users.get(place.owner_id()).await;
        if owner.is_none() {
            warn!(place_id = %place.id(), owner_id = %place.owner_id(), "Place owner no longer exists");
        }

        let mut amenities = Vec::with_capacity(place.amenity_ids().len());
        for id in place.amenity_ids() {
            if let Some(amenity) = self.amenities.get(*id).await {
                amenities.push(amenity);
            }
        }

        let mut reviews = Vec::with_capacity(place.review_ids().len());
        for id in place.review_ids() {
            if let Some(review) = self.reviews.get(*id).await {
                reviews.push(review);
            }
        }

        place.to_record(owner, amenities, reviews)
    }

    pub async fn render_place(&self, place: &Place) -> Record {
        Record::Place(self.place_record(place).await)
    }

    pub async fn counts(&self) -> EntityCounts {
        EntityCounts {
            users: self.users.count().await,
            places: self.places.count().await,
            reviews: self.reviews.count().await,
            amenities: self.amenities.count().await,
        }
    }
}

/// Parses an id string; anything that is not a UUID never resolves.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Fetch-or-fail lookup shared by the `get_*`, `update_*` and `delete_*` operations.
async fn find<T: Entity>(repository: &dyn Repository<T>, id: &str) -> Result<T, AppError> {
    lookup(repository, id).await.ok_or_else(|| {
        AppError::not_found(format!("{} not found", T::KIND), json!({ "id": id }))
    })
}

fn require(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_input(
            format!("{field} is required"),
            json!({ "field": field }),
        ));
    }
    Ok(())
}

/// Resolves a raw id string against a repository.
async fn lookup<T: Entity>(repository: &dyn Repository<T>, raw: &str) -> Option<T> {
    match parse_id(raw) {
        Some(id) => repository.get(id).await,
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRepository;

    fn facade() -> HBnBFacade {
        HBnBFacade::in_memory(AmenityPolicy::Skip)
    }

    fn alice() -> NewUser {
        NewUser {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            email: "alice@test.com".to_string(),
            is_admin: false,
        }
    }

    fn place_input(owner_id: &str) -> PlaceInput {
        PlaceInput {
            title: "Cabin".to_string(),
            description: "Quiet cabin".to_string(),
            price: 200.0,
            latitude: 45.0,
            longitude: -120.0,
            owner_id: owner_id.to_string(),
            amenities: Vec::new(),
        }
    }

    fn review_input(user_id: Uuid, place_id: Uuid, rating: i64) -> ReviewInput {
        ReviewInput {
            text: "Lovely".to_string(),
            rating,
            user_id: user_id.to_string(),
            place_id: place_id.to_string(),
        }
    }

    async fn amenity(facade: &HBnBFacade, name: &str) -> Amenity {
        facade
            .create_amenity(NewAmenity {
                name: name.to_string(),
            })
            .await
            .unwrap()
    }

    #[test]
    fn test_amenity_policy_parsing() {
        assert_eq!("skip".parse::<AmenityPolicy>(), Ok(AmenityPolicy::Skip));
        assert_eq!(" REJECT ".parse::<AmenityPolicy>(), Ok(AmenityPolicy::Reject));
        assert!("strict".parse::<AmenityPolicy>().is_err());
        assert_eq!(AmenityPolicy::default().to_string(), "skip");
    }

    #[tokio::test]
    async fn test_create_user_requires_fields() {
        let facade = facade();

        let err = facade
            .create_user(NewUser {
                first_name: "  ".to_string(),
                ..alice()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput { .. }));
        assert!(facade.get_all_users().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_user_propagates_validation_error() {
        let facade = facade();

        let err = facade
            .create_user(NewUser {
                email: "alice-at-test.com".to_string(),
                ..alice()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let facade = facade();
        facade.create_user(alice()).await.unwrap();

        let err = facade
            .create_user(NewUser {
                first_name: "Other".to_string(),
                ..alice()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput { .. }));
        assert_eq!(facade.get_all_users().await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_user_email_conflict_and_success() {
        let facade = facade();
        let alice = facade.create_user(alice()).await.unwrap();
        let bob = facade
            .create_user(NewUser {
                first_name: "Bob".to_string(),
                email: "bob@test.com".to_string(),
                ..self::alice()
            })
            .await
            .unwrap();

        let err = facade
            .update_user(
                &bob.id().to_string(),
                UserPatch {
                    email: Some("alice@test.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { .. }));

        let updated = facade
            .update_user(
                &alice.id().to_string(),
                UserPatch {
                    email: Some("alice@test.com".to_string()),
                    last_name: Some("Jones".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.last_name(), "Jones");
        assert_eq!(
            facade.get_user(&alice.id().to_string()).await.unwrap(),
            updated
        );
    }

    #[tokio::test]
    async fn test_update_user_cannot_blank_names() {
        let facade = facade();
        let alice = facade.create_user(alice()).await.unwrap();
        let id = alice.id().to_string();

        let err = facade
            .update_user(
                &id,
                UserPatch {
                    first_name: Some(String::new()),
                    last_name: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(facade.get_user(&id).await.unwrap(), alice);
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_ids_are_not_found() {
        let facade = facade();

        for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
            assert!(matches!(
                facade.get_user(&id).await.unwrap_err(),
                AppError::NotFound { .. }
            ));
            assert!(matches!(
                facade.delete_place(&id).await.unwrap_err(),
                AppError::NotFound { .. }
            ));
            assert!(matches!(
                facade
                    .update_amenity(&id, AmenityPatch::default())
                    .await
                    .unwrap_err(),
                AppError::NotFound { .. }
            ));
        }
    }

    #[tokio::test]
    async fn test_create_place_with_unknown_owner() {
        let facade = facade();

        let err = facade
            .create_place(place_input(&Uuid::new_v4().to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert!(facade.get_all_places().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_place_invalid_price_stores_nothing() {
        let facade = facade();
        let owner = facade.create_user(alice()).await.unwrap();
        let before = facade.get_all_places().await.len();

        let err = facade
            .create_place(PlaceInput {
                price: -50.0,
                ..place_input(&owner.id().to_string())
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(facade.get_all_places().await.len(), before);
    }

    #[tokio::test]
    async fn test_create_place_skips_unresolved_amenities() {
        let facade = facade();
        let owner = facade.create_user(alice()).await.unwrap();
        let wifi = amenity(&facade, "Wifi").await;

        let place = facade
            .create_place(PlaceInput {
                amenities: vec![
                    Uuid::new_v4().to_string(),
                    wifi.id().to_string(),
                    "garbage".to_string(),
                ],
                ..place_input(&owner.id().to_string())
            })
            .await
            .unwrap();

        assert_eq!(place.amenity_ids(), &[wifi.id()]);
    }

    #[tokio::test]
    async fn test_create_place_reject_policy() {
        let facade = HBnBFacade::in_memory(AmenityPolicy::Reject);
        let owner = facade.create_user(alice()).await.unwrap();
        let wifi = amenity(&facade, "Wifi").await;

        let err = facade
            .create_place(PlaceInput {
                amenities: vec![wifi.id().to_string(), Uuid::new_v4().to_string()],
                ..place_input(&owner.id().to_string())
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput { .. }));
        assert!(facade.get_all_places().await.is_empty());
    }

    #[tokio::test]
    async fn test_place_record_nests_owner_and_amenities() {
        let facade = facade();
        let owner = facade.create_user(alice()).await.unwrap();
        let place = facade
            .create_place(place_input(&owner.id().to_string()))
            .await
            .unwrap();
        let fireplace = amenity(&facade, "Fireplace").await;

        let place = facade
            .add_amenity_to_place(&place.id().to_string(), &fireplace.id().to_string())
            .await
            .unwrap();
        let json = facade.render_place(&place).await.to_json().unwrap();

        assert_eq!(json["owner"]["email"], "alice@test.com");
        assert_eq!(json["amenities"].as_array().unwrap().len(), 1);
        assert_eq!(json["amenities"][0]["name"], "Fireplace");
        assert_eq!(facade.render_place(&place).await.to_json().unwrap(), json);
    }

    #[tokio::test]
    async fn test_add_amenity_twice_is_idempotent() {
        let facade = facade();
        let owner = facade.create_user(alice()).await.unwrap();
        let place = facade
            .create_place(place_input(&owner.id().to_string()))
            .await
            .unwrap();
        let wifi = amenity(&facade, "Wifi").await;
        let (place_id, wifi_id) = (place.id().to_string(), wifi.id().to_string());

        facade.add_amenity_to_place(&place_id, &wifi_id).await.unwrap();
        let place = facade.add_amenity_to_place(&place_id, &wifi_id).await.unwrap();

        assert_eq!(place.amenity_ids().len(), 1);
    }

    #[tokio::test]
    async fn test_create_review_attaches_to_place() {
        let facade = facade();
        let owner = facade.create_user(alice()).await.unwrap();
        let place = facade
            .create_place(place_input(&owner.id().to_string()))
            .await
            .unwrap();

        let review = facade
            .create_review(review_input(owner.id(), place.id(), 5))
            .await
            .unwrap();

        let place = facade.get_place(&place.id().to_string()).await.unwrap();
        assert_eq!(place.review_ids(), &[review.id()]);

        let json = facade.render_place(&place).await.to_json().unwrap();
        assert_eq!(json["reviews"][0]["text"], "Lovely");
        assert_eq!(json["reviews"][0]["__class__"], "Review");
    }

    #[tokio::test]
    async fn test_create_review_checks_rating_and_references() {
        let facade = facade();
        let owner = facade.create_user(alice()).await.unwrap();
        let place = facade
            .create_place(place_input(&owner.id().to_string()))
            .await
            .unwrap();

        let err = facade
            .create_review(review_input(owner.id(), place.id(), 6))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        let err = facade
            .create_review(review_input(Uuid::new_v4(), place.id(), 3))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        let err = facade
            .create_review(review_input(owner.id(), Uuid::new_v4(), 3))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));

        assert!(facade.get_all_reviews().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_reviews_by_place_filters_in_order() {
        let facade = facade();
        let owner = facade.create_user(alice()).await.unwrap();
        let owner_id = owner.id().to_string();
        let cabin = facade.create_place(place_input(&owner_id)).await.unwrap();
        let loft = facade.create_place(place_input(&owner_id)).await.unwrap();

        let first = facade
            .create_review(review_input(owner.id(), cabin.id(), 4))
            .await
            .unwrap();
        facade
            .create_review(review_input(owner.id(), loft.id(), 2))
            .await
            .unwrap();
        let third = facade
            .create_review(review_input(owner.id(), cabin.id(), 5))
            .await
            .unwrap();

        let reviews = facade
            .get_reviews_by_place(&cabin.id().to_string())
            .await
            .unwrap();
        let ids: Vec<Uuid> = reviews.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![first.id(), third.id()]);

        let err = facade
            .get_reviews_by_place(&Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_review_revalidates_rating() {
        let facade = facade();
        let owner = facade.create_user(alice()).await.unwrap();
        let place = facade
            .create_place(place_input(&owner.id().to_string()))
            .await
            .unwrap();
        let review = facade
            .create_review(review_input(owner.id(), place.id(), 3))
            .await
            .unwrap();
        let id = review.id().to_string();

        let err = facade
            .update_review(
                &id,
                ReviewPatch {
                    rating: Some(99),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(facade.get_review(&id).await.unwrap().rating(), 3);
    }

    #[tokio::test]
    async fn test_delete_does_not_cascade() {
        let facade = facade();
        let owner = facade.create_user(alice()).await.unwrap();
        let place = facade
            .create_place(place_input(&owner.id().to_string()))
            .await
            .unwrap();
        let review = facade
            .create_review(review_input(owner.id(), place.id(), 4))
            .await
            .unwrap();

        let deleted = facade.delete_user(&owner.id().to_string()).await.unwrap();
        assert_eq!(deleted.message(), "User deleted successfully");
        facade.delete_review(&review.id().to_string()).await.unwrap();

        let place = facade.get_place(&place.id().to_string()).await.unwrap();
        assert_eq!(place.review_ids(), &[review.id()]);

        let json = facade.render_place(&place).await.to_json().unwrap();
        assert!(json["owner"].is_null());
        assert_eq!(json["owner_id"], owner.id().to_string());
        assert!(json["reviews"].as_array().unwrap().is_empty());

        let counts = facade.counts().await;
        assert_eq!(
            counts,
            EntityCounts {
                users: 0,
                places: 1,
                reviews: 0,
                amenities: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_user_never_reaches_repository() {
        let mut users = MockRepository::<User>::new();
        users.expect_get_by_attribute().returning(|_, _| None);
        users.expect_add().never();

        let facade = HBnBFacade::new(
            Arc::new(users),
            Arc::new(MockRepository::<Place>::new()),
            Arc::new(MockRepository::<Review>::new()),
            Arc::new(MockRepository::<Amenity>::new()),
            AmenityPolicy::Skip,
        );

        let result = facade
            .create_user(NewUser {
                first_name: "x".repeat(51),
                ..alice()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_review_attach_failure_is_internal() {
        let owner = User::new(alice()).unwrap();
        let place = Place::new(NewPlace {
            title: "Cabin".to_string(),
            description: String::new(),
            price: 100.0,
            latitude: 0.0,
            longitude: 0.0,
            owner_id: owner.id(),
        })
        .unwrap();
        let (user_id, place_id) = (owner.id(), place.id());

        let mut users = MockRepository::<User>::new();
        users.expect_get().returning(move |_| Some(owner.clone()));
        let mut places = MockRepository::<Place>::new();
        places.expect_get().returning(move |_| Some(place.clone()));
        places
            .expect_update()
            .times(1)
            .returning(|_| Err(AppError::not_found("Place not found", json!({}))));
        let mut reviews = MockRepository::<Review>::new();
        reviews.expect_add().times(1).returning(Ok);

        let facade = HBnBFacade::new(
            Arc::new(users),
            Arc::new(places),
            Arc::new(reviews),
            Arc::new(MockRepository::<Amenity>::new()),
            AmenityPolicy::Skip,
        );

        let err = facade
            .create_review(review_input(user_id, place_id, 4))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.status().0, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_place_with_unknown_owner_never_reaches_repository() {
        let mut users = MockRepository::<User>::new();
        users.expect_get().times(1).returning(|_| None);
        let mut places = MockRepository::<Place>::new();
        places.expect_add().never();

        let facade = HBnBFacade::new(
            Arc::new(users),
            Arc::new(places),
            Arc::new(MockRepository::<Review>::new()),
            Arc::new(MockRepository::<Amenity>::new()),
            AmenityPolicy::Skip,
        );

        let result = facade
            .create_place(place_input(&Uuid::new_v4().to_string()))
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
