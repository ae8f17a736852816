//! The typed API surface the pages call into.
//!
//! One method per backend collection or sub-resource, all funneled through
//! the shared [`HttpApiClient`]. Wrappers take primitive identifiers, never
//! whole entities, and they do not set the auth header themselves; that is
//! the request interceptor's job alone.

use std::rc::Rc;

use amparo::api::{ApiClient, ApiError, HttpApiClient};
use amparo::claims;
use amparo::data::{
    Activity, AuthResponse, Beneficiary, Center, Credentials, Invoice, ListScope, Profile,
    StaffMember, Zone,
};
use amparo::session::Session;

/// Backend origin used when no build-time override is supplied.
const DEFAULT_API_URL: &str = "http://localhost:3030/api/v1";

/// The base URL for every request: the `AMPARO_API_URL` build-time override,
/// or the default local backend.
pub fn base_url() -> &'static str {
    option_env!("AMPARO_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Resource paths, kept together so the shapes stay conventional.
mod paths {
    pub fn login() -> String {
        "/auth/login".to_string()
    }

    use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

    /// The email goes into a path segment, so reserved characters in a legal
    /// address (`+`, `/`, `?`) must be escaped or the request is misrouted.
    pub fn profile(email: &str) -> String {
        let encoded = utf8_percent_encode(email, NON_ALPHANUMERIC);
        format!("/profiles/{encoded}")
    }

    pub fn zones() -> String {
        "/zones".to_string()
    }

    pub fn centers() -> String {
        "/centers".to_string()
    }

    pub fn center(id: u64) -> String {
        format!("/centers/{id}")
    }

    pub fn centers_by_zone(zone_id: u64) -> String {
        format!("/zones/{zone_id}/centers")
    }

    pub fn beneficiaries() -> String {
        "/beneficiaries".to_string()
    }

    pub fn beneficiary(id: u64) -> String {
        format!("/beneficiaries/{id}")
    }

    pub fn beneficiaries_by_zone(zone_id: u64) -> String {
        format!("/zones/{zone_id}/beneficiaries")
    }

    pub fn beneficiaries_by_center(center_id: u64) -> String {
        format!("/centers/{center_id}/beneficiaries")
    }

    pub fn staff() -> String {
        "/staff".to_string()
    }

    pub fn staff_member(id: u64) -> String {
        format!("/staff/{id}")
    }

    pub fn staff_by_zone(zone_id: u64) -> String {
        format!("/zones/{zone_id}/staff")
    }

    pub fn staff_by_center(center_id: u64) -> String {
        format!("/centers/{center_id}/staff")
    }

    pub fn activities() -> String {
        "/activities".to_string()
    }

    pub fn activity(id: u64) -> String {
        format!("/activities/{id}")
    }

    pub fn activities_by_zone(zone_id: u64) -> String {
        format!("/zones/{zone_id}/activities")
    }

    pub fn activities_by_center(center_id: u64) -> String {
        format!("/centers/{center_id}/activities")
    }

    pub fn invoices() -> String {
        "/invoices".to_string()
    }

    pub fn invoice(id: u64) -> String {
        format!("/invoices/{id}")
    }

    pub fn invoices_by_zone(zone_id: u64) -> String {
        format!("/zones/{zone_id}/invoices")
    }

    pub fn invoices_by_center(center_id: u64) -> String {
        format!("/centers/{center_id}/invoices")
    }
}

/// The main API client for the Amparo console, providing the typed fetch
/// functions the pages call.
pub struct Api {
    client: HttpApiClient,
    session: Rc<dyn Session>,
}

impl Api {
    pub fn new(base_url: &str, session: Rc<dyn Session>) -> Self {
        Api {
            client: HttpApiClient::new(base_url, session.clone()),
            session,
        }
    }

    // --- Session & identity ---

    /// Posts credentials and stores the returned bearer token in the session.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let auth: AuthResponse = self.client.post(&paths::login(), credentials).await?;
        self.session.store(&auth.token);
        Ok(auth)
    }

    /// The profile of the logged-in user, or `None` when nobody is logged in
    /// or the backend has no record for the token's subject. No profile
    /// request is made when the token yields no identity.
    pub async fn current_profile(&self) -> Result<Option<Profile>, ApiError> {
        let Some(subject) = claims::current_identity(self.session.as_ref()) else {
            return Ok(None);
        };
        self.profile_by_email(&subject).await
    }

    pub async fn profile_by_email(&self, email: &str) -> Result<Option<Profile>, ApiError> {
        match self.client.get(&paths::profile(email)).await {
            Ok(profile) => Ok(Some(profile)),
            Err(ApiError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    // --- Zones ---

    pub async fn zones(&self) -> Result<Vec<Zone>, ApiError> {
        self.client.get(&paths::zones()).await
    }

    // --- Centers ---

    pub async fn centers(&self) -> Result<Vec<Center>, ApiError> {
        self.client.get(&paths::centers()).await
    }

    pub async fn centers_by_zone(&self, zone_id: u64) -> Result<Vec<Center>, ApiError> {
        self.client.get(&paths::centers_by_zone(zone_id)).await
    }

    /// The center list as the given profile is allowed to see it.
    pub async fn centers_for(&self, profile: Option<&Profile>) -> Result<Vec<Center>, ApiError> {
        match ListScope::for_profile(profile) {
            ListScope::All => self.centers().await,
            ListScope::Zone(zone_id) => self.centers_by_zone(zone_id).await,
        }
    }

    pub async fn center(&self, id: u64) -> Result<Center, ApiError> {
        self.client.get(&paths::center(id)).await
    }

    pub async fn create_center(&self, center: &Center) -> Result<Center, ApiError> {
        self.client.post(&paths::centers(), center).await
    }

    pub async fn update_center(&self, id: u64, center: &Center) -> Result<Center, ApiError> {
        self.client.put(&paths::center(id), center).await
    }

    pub async fn delete_center(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&paths::center(id)).await
    }

    // --- Beneficiaries ---

    pub async fn beneficiaries(&self) -> Result<Vec<Beneficiary>, ApiError> {
        self.client.get(&paths::beneficiaries()).await
    }

    pub async fn beneficiaries_by_zone(&self, zone_id: u64) -> Result<Vec<Beneficiary>, ApiError> {
        self.client.get(&paths::beneficiaries_by_zone(zone_id)).await
    }

    pub async fn beneficiaries_by_center(
        &self,
        center_id: u64,
    ) -> Result<Vec<Beneficiary>, ApiError> {
        self.client
            .get(&paths::beneficiaries_by_center(center_id))
            .await
    }

    pub async fn beneficiaries_for(
        &self,
        profile: Option<&Profile>,
    ) -> Result<Vec<Beneficiary>, ApiError> {
        match ListScope::for_profile(profile) {
            ListScope::All => self.beneficiaries().await,
            ListScope::Zone(zone_id) => self.beneficiaries_by_zone(zone_id).await,
        }
    }

    pub async fn beneficiary(&self, id: u64) -> Result<Beneficiary, ApiError> {
        self.client.get(&paths::beneficiary(id)).await
    }

    pub async fn create_beneficiary(
        &self,
        beneficiary: &Beneficiary,
    ) -> Result<Beneficiary, ApiError> {
        self.client.post(&paths::beneficiaries(), beneficiary).await
    }

    pub async fn update_beneficiary(
        &self,
        id: u64,
        beneficiary: &Beneficiary,
    ) -> Result<Beneficiary, ApiError> {
        self.client.put(&paths::beneficiary(id), beneficiary).await
    }

    pub async fn delete_beneficiary(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&paths::beneficiary(id)).await
    }

    // --- Staff ---

    pub async fn staff(&self) -> Result<Vec<StaffMember>, ApiError> {
        self.client.get(&paths::staff()).await
    }

    pub async fn staff_by_zone(&self, zone_id: u64) -> Result<Vec<StaffMember>, ApiError> {
        self.client.get(&paths::staff_by_zone(zone_id)).await
    }

    pub async fn staff_by_center(&self, center_id: u64) -> Result<Vec<StaffMember>, ApiError> {
        self.client.get(&paths::staff_by_center(center_id)).await
    }

    pub async fn staff_for(
        &self,
        profile: Option<&Profile>,
    ) -> Result<Vec<StaffMember>, ApiError> {
        match ListScope::for_profile(profile) {
            ListScope::All => self.staff().await,
            ListScope::Zone(zone_id) => self.staff_by_zone(zone_id).await,
        }
    }

    pub async fn staff_member(&self, id: u64) -> Result<StaffMember, ApiError> {
        self.client.get(&paths::staff_member(id)).await
    }

    pub async fn create_staff_member(
        &self,
        member: &StaffMember,
    ) -> Result<StaffMember, ApiError> {
        self.client.post(&paths::staff(), member).await
    }

    pub async fn update_staff_member(
        &self,
        id: u64,
        member: &StaffMember,
    ) -> Result<StaffMember, ApiError> {
        self.client.put(&paths::staff_member(id), member).await
    }

    pub async fn delete_staff_member(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&paths::staff_member(id)).await
    }

    // --- Activities ---

    pub async fn activities(&self) -> Result<Vec<Activity>, ApiError> {
        self.client.get(&paths::activities()).await
    }

    pub async fn activities_by_zone(&self, zone_id: u64) -> Result<Vec<Activity>, ApiError> {
        self.client.get(&paths::activities_by_zone(zone_id)).await
    }

    pub async fn activities_by_center(&self, center_id: u64) -> Result<Vec<Activity>, ApiError> {
        self.client.get(&paths::activities_by_center(center_id)).await
    }

    pub async fn activities_for(
        &self,
        profile: Option<&Profile>,
    ) -> Result<Vec<Activity>, ApiError> {
        match ListScope::for_profile(profile) {
            ListScope::All => self.activities().await,
            ListScope::Zone(zone_id) => self.activities_by_zone(zone_id).await,
        }
    }

    pub async fn activity(&self, id: u64) -> Result<Activity, ApiError> {
        self.client.get(&paths::activity(id)).await
    }

    pub async fn create_activity(&self, activity: &Activity) -> Result<Activity, ApiError> {
        self.client.post(&paths::activities(), activity).await
    }

    pub async fn update_activity(
        &self,
        id: u64,
        activity: &Activity,
    ) -> Result<Activity, ApiError> {
        self.client.put(&paths::activity(id), activity).await
    }

    pub async fn delete_activity(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&paths::activity(id)).await
    }

    // --- Invoices ---

    pub async fn invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.client.get(&paths::invoices()).await
    }

    pub async fn invoices_by_zone(&self, zone_id: u64) -> Result<Vec<Invoice>, ApiError> {
        self.client.get(&paths::invoices_by_zone(zone_id)).await
    }

    pub async fn invoices_by_center(&self, center_id: u64) -> Result<Vec<Invoice>, ApiError> {
        self.client.get(&paths::invoices_by_center(center_id)).await
    }

    pub async fn invoices_for(
        &self,
        profile: Option<&Profile>,
    ) -> Result<Vec<Invoice>, ApiError> {
        match ListScope::for_profile(profile) {
            ListScope::All => self.invoices().await,
            ListScope::Zone(zone_id) => self.invoices_by_zone(zone_id).await,
        }
    }

    pub async fn invoice(&self, id: u64) -> Result<Invoice, ApiError> {
        self.client.get(&paths::invoice(id)).await
    }

    pub async fn create_invoice(&self, invoice: &Invoice) -> Result<Invoice, ApiError> {
        self.client.post(&paths::invoices(), invoice).await
    }

    pub async fn update_invoice(&self, id: u64, invoice: &Invoice) -> Result<Invoice, ApiError> {
        self.client.put(&paths::invoice(id), invoice).await
    }

    pub async fn delete_invoice(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(&paths::invoice(id)).await
    }
}

/// Create a new instance of the API client bound to the given session.
pub fn create(session: Rc<dyn Session>) -> Api {
    Api::new(base_url(), session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_paths_carry_the_zone_id() {
        assert_eq!(paths::centers_by_zone(7), "/zones/7/centers");
        assert!(paths::beneficiaries_by_zone(7).contains("/7"));
        assert!(paths::staff_by_zone(7).contains("/7"));
        assert!(paths::activities_by_zone(7).contains("/7"));
        assert!(paths::invoices_by_zone(7).contains("/7"));
    }

    #[test]
    fn test_parent_paths_nest_under_center() {
        assert_eq!(paths::beneficiaries_by_center(3), "/centers/3/beneficiaries");
        assert_eq!(paths::staff_by_center(3), "/centers/3/staff");
        assert_eq!(paths::activities_by_center(3), "/centers/3/activities");
        assert_eq!(paths::invoices_by_center(3), "/centers/3/invoices");
    }

    #[test]
    fn test_detail_paths() {
        assert_eq!(paths::center(42), "/centers/42");
        assert_eq!(paths::beneficiary(42), "/beneficiaries/42");
    }

    #[test]
    fn test_profile_path_escapes_the_email() {
        assert_eq!(
            paths::profile("ana@amparo.org"),
            "/profiles/ana%40amparo%2Eorg"
        );

        // Reserved characters must not survive into the path raw.
        let path = paths::profile("ana+alta@amparo.org/..");
        assert!(!path[10..].contains('+'), "got {path}");
        assert!(!path[10..].contains('/'), "got {path}");
        assert!(path.contains("%2B"), "got {path}");
    }

    #[test]
    fn test_base_url_falls_back_to_default() {
        // No override is set in the test build.
        assert_eq!(base_url(), DEFAULT_API_URL);
    }
}
