//! HTTP client for the mobile-app API.
//!
//! One async method per endpoint. The client borrows a
//! [`ClientWithMiddleware`] so callers can share a single HTTP stack, with
//! retry middleware attached, across many API clients.
//!
//! Each endpoint builds its request through a dedicated builder method so
//! request construction, including token checks, stays separate from the
//! send path and can be exercised without a network.

use std::fmt::Debug;

use rand::distributions::Alphanumeric;
use rand::distributions::DistString;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Method;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_middleware::RequestBuilder;
use tracing::debug;
use tracing::instrument;
use uuid::Uuid;

use crate::constants::ACCEPT_LANGUAGE;
use crate::constants::DEVICE_ID_LEN;
use crate::constants::MARKET_ID;
use crate::constants::SENSOR_DATA_HEADER;
use crate::constants::SOURCE_APP;
use crate::constants::USER_AGENT;
use crate::error::TokenKind;
use crate::types::request::ActivationRequest;
use crate::types::request::RegistrationRequest;
use crate::types::response::ActivationResponse;
use crate::types::response::ClientResponse;
use crate::types::response::CustomerPointResponse;
use crate::types::response::LoginRefreshResponse;
use crate::types::response::LoginResponse;
use crate::types::response::OfferDealStackResponse;
use crate::types::response::OfferDetailsResponse;
use crate::types::response::OfferResponse;
use crate::types::response::RegistrationResponse;
use crate::types::response::RestaurantLocationResponse;
use crate::types::response::RestaurantResponse;
use crate::types::response::TokenResponse;
use crate::ClientError;
use crate::ClientResult;

/// Typed client for the mobile-app API.
///
/// Holds the base URL, the client id issued to the app build, and the two
/// bearer tokens. Token lifecycle is owned by the caller: obtain a login
/// token via [`security_auth_token`](Self::security_auth_token), an auth
/// token via [`customer_login`](Self::customer_login) or
/// [`customer_login_refresh`](Self::customer_login_refresh), and install
/// them with the setters.
pub struct MaccasClient<'a> {
    base_url: String,
    client: &'a ClientWithMiddleware,
    client_id: String,
    login_token: Option<String>,
    auth_token: Option<String>,
}

impl Debug for MaccasClient<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaccasClient")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl<'a> MaccasClient<'a> {
    /// Create a client with no tokens set.
    pub fn new(base_url: String, client: &'a ClientWithMiddleware, client_id: String) -> MaccasClient<'a> {
        MaccasClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            client_id,
            login_token: None,
            auth_token: None,
        }
    }

    /// Install the login token from a security auth exchange.
    pub fn set_login_token(&mut self, login_token: &str) {
        self.login_token = Some(login_token.to_string());
    }

    /// Install the customer access token from a login or refresh.
    pub fn set_auth_token(&mut self, auth_token: &str) {
        self.auth_token = Some(auth_token.to_string());
    }

    /// Build a request carrying the device fingerprint headers the app
    /// sends with every call, including a fresh per-request `mcd-uuid`.
    fn request(&self, method: Method, resource: &str) -> RequestBuilder {
        let base_url = &self.base_url;

        self.client
            .request(method, format!("{base_url}/{resource}"))
            .header("accept-encoding", "gzip")
            .header("accept-charset", "UTF-8")
            .header("accept-language", ACCEPT_LANGUAGE)
            .header("content-type", "application/json; charset=UTF-8")
            .header("mcd-clientid", &self.client_id)
            .header("mcd-uuid", Uuid::new_v4().as_hyphenated().to_string())
            .header("user-agent", USER_AGENT)
            .header("mcd-sourceapp", SOURCE_APP)
            .header("mcd-marketid", MARKET_ID)
    }

    fn login_token(&self) -> ClientResult<&str> {
        self.login_token
            .as_deref()
            .ok_or(ClientError::MissingToken { kind: TokenKind::Login })
    }

    fn auth_token(&self) -> ClientResult<&str> {
        self.auth_token
            .as_deref()
            .ok_or(ClientError::MissingToken { kind: TokenKind::Auth })
    }

    /// Random device id in the format the app generates on first launch.
    fn device_id() -> String {
        let mut rng = StdRng::from_entropy();
        Alphanumeric.sample_string(&mut rng, DEVICE_ID_LEN)
    }

    // POST v1/security/auth/token
    /// Exchange the client id and secret for a login token.
    #[instrument(skip(self, client_secret))]
    pub async fn security_auth_token(&self, client_secret: &str) -> ClientResult<ClientResponse<TokenResponse>> {
        let response = self.security_auth_token_request(client_secret).send().await?;
        debug!(status = %response.status(), "security auth token response");

        ClientResponse::from_response(response).await
    }

    fn security_auth_token_request(&self, client_secret: &str) -> RequestBuilder {
        self.request(Method::POST, "v1/security/auth/token")
            .query(&[("grantType", "client_credentials")])
            .basic_auth(&self.client_id, Some(client_secret))
            .header("mcd-clientsecret", client_secret)
            .header("content-type", "application/x-www-form-urlencoded; charset=UTF-8")
    }

    // POST exp/v1/customer/login
    /// Log a customer in with email credentials.
    ///
    /// Requires the login token. Generates a fresh random device id per call
    /// and passes the caller's bot-detection sensor payload through.
    #[instrument(skip(self, login_username, login_password, sensor_data))]
    pub async fn customer_login(
        &self,
        login_username: &str,
        login_password: &str,
        sensor_data: &str,
    ) -> ClientResult<ClientResponse<LoginResponse>> {
        let request = self.customer_login_request(login_username, login_password, sensor_data)?;
        let response = request.send().await?;
        debug!(status = %response.status(), "customer login response");

        ClientResponse::from_response(response).await
    }

    fn customer_login_request(
        &self,
        login_username: &str,
        login_password: &str,
        sensor_data: &str,
    ) -> ClientResult<RequestBuilder> {
        let token = self.login_token()?;
        let credentials = serde_json::json!({
            "credentials": {
                "loginUsername": login_username,
                "password": login_password,
                "type": "email"
            },
            "deviceId": Self::device_id()
        });

        Ok(self
            .request(Method::POST, "exp/v1/customer/login")
            .bearer_auth(token)
            .header(SENSOR_DATA_HEADER, sensor_data)
            .json(&credentials))
    }

    // POST exp/v1/customer/login/refresh
    /// Exchange a refresh token for a new access token pair.
    #[instrument(skip(self, refresh_token))]
    pub async fn customer_login_refresh(
        &self,
        refresh_token: &str,
    ) -> ClientResult<ClientResponse<LoginRefreshResponse>> {
        let response = self.customer_login_refresh_request(refresh_token)?.send().await?;
        debug!(status = %response.status(), "customer login refresh response");

        ClientResponse::from_response(response).await
    }

    fn customer_login_refresh_request(&self, refresh_token: &str) -> ClientResult<RequestBuilder> {
        let token = self.auth_token()?;
        let body = serde_json::json!({ "refreshToken": refresh_token });

        Ok(self
            .request(Method::POST, "exp/v1/customer/login/refresh")
            .bearer_auth(token)
            .json(&body))
    }

    // POST exp/v1/customer/registration
    /// Register a new customer account.
    ///
    /// Requires the login token. The caller supplies the full registration
    /// payload including device details and policy acceptance.
    #[instrument(skip(self, registration, sensor_data))]
    pub async fn customer_registration(
        &self,
        registration: &RegistrationRequest,
        sensor_data: &str,
    ) -> ClientResult<ClientResponse<RegistrationResponse>> {
        let response = self.customer_registration_request(registration, sensor_data)?.send().await?;
        debug!(status = %response.status(), "customer registration response");

        ClientResponse::from_response(response).await
    }

    fn customer_registration_request(
        &self,
        registration: &RegistrationRequest,
        sensor_data: &str,
    ) -> ClientResult<RequestBuilder> {
        let token = self.login_token()?;

        Ok(self
            .request(Method::POST, "exp/v1/customer/registration")
            .bearer_auth(token)
            .header(SENSOR_DATA_HEADER, sensor_data)
            .json(registration))
    }

    // PUT exp/v1/customer/activation
    /// Activate a registered account with the emailed activation code.
    #[instrument(skip(self, activation))]
    pub async fn activate_customer(
        &self,
        activation: &ActivationRequest,
    ) -> ClientResult<ClientResponse<ActivationResponse>> {
        let response = self.activate_customer_request(activation)?.send().await?;
        debug!(status = %response.status(), "customer activation response");

        ClientResponse::from_response(response).await
    }

    fn activate_customer_request(&self, activation: &ActivationRequest) -> ClientResult<RequestBuilder> {
        let token = self.login_token()?;

        Ok(self
            .request(Method::PUT, "exp/v1/customer/activation")
            .bearer_auth(token)
            .json(activation))
    }

    // GET exp/v1/offers
    /// List offers available to the account around a location.
    ///
    /// `distance` is in meters; `timezone_offset_in_minutes` is the device
    /// offset from UTC.
    #[instrument(skip(self))]
    pub async fn get_offers(
        &self,
        distance: f64,
        latitude: f64,
        longitude: f64,
        opt_outs: &str,
        timezone_offset_in_minutes: i64,
    ) -> ClientResult<ClientResponse<OfferResponse>> {
        let request =
            self.get_offers_request(distance, latitude, longitude, opt_outs, timezone_offset_in_minutes)?;
        let response = request.send().await?;
        debug!(status = %response.status(), "offers response");

        ClientResponse::from_response(response).await
    }

    fn get_offers_request(
        &self,
        distance: f64,
        latitude: f64,
        longitude: f64,
        opt_outs: &str,
        timezone_offset_in_minutes: i64,
    ) -> ClientResult<RequestBuilder> {
        let token = self.auth_token()?;
        let params = [
            ("distance", distance.to_string()),
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("optOuts", opt_outs.to_string()),
            ("timezoneOffsetInMinutes", timezone_offset_in_minutes.to_string()),
        ];

        Ok(self.request(Method::GET, "exp/v1/offers").query(&params).bearer_auth(token))
    }

    // GET exp/v1/offers/details/{offerPropositionId}
    /// Fetch full details for a single offer proposition.
    #[instrument(skip(self))]
    pub async fn offer_details(
        &self,
        offer_proposition_id: i64,
    ) -> ClientResult<ClientResponse<OfferDetailsResponse>> {
        let response = self.offer_details_request(offer_proposition_id)?.send().await?;
        debug!(status = %response.status(), "offer details response");

        ClientResponse::from_response(response).await
    }

    fn offer_details_request(&self, offer_proposition_id: i64) -> ClientResult<RequestBuilder> {
        let token = self.auth_token()?;

        Ok(self
            .request(Method::GET, &format!("exp/v1/offers/details/{offer_proposition_id}"))
            .bearer_auth(token))
    }

    // GET exp/v1/offers/dealstack
    /// Fetch the current dealstack and redemption code for a store.
    #[instrument(skip(self))]
    pub async fn get_offers_dealstack(
        &self,
        offset: i64,
        store_id: i64,
    ) -> ClientResult<ClientResponse<OfferDealStackResponse>> {
        let response = self.get_offers_dealstack_request(offset, store_id)?.send().await?;
        debug!(status = %response.status(), "dealstack response");

        ClientResponse::from_response(response).await
    }

    fn get_offers_dealstack_request(&self, offset: i64, store_id: i64) -> ClientResult<RequestBuilder> {
        let token = self.auth_token()?;
        let params = [("offset", offset.to_string()), ("storeId", store_id.to_string())];

        Ok(self
            .request(Method::GET, "exp/v1/offers/dealstack")
            .query(&params)
            .bearer_auth(token))
    }

    // POST exp/v1/offers/dealstack/{offerId}
    /// Add an offer to the dealstack for redemption at a store.
    #[instrument(skip(self))]
    pub async fn add_to_offers_dealstack(
        &self,
        offer_id: i64,
        offset: i64,
        store_id: i64,
    ) -> ClientResult<ClientResponse<OfferDealStackResponse>> {
        let response = self.add_to_offers_dealstack_request(offer_id, offset, store_id)?.send().await?;
        debug!(status = %response.status(), "add to dealstack response");

        ClientResponse::from_response(response).await
    }

    fn add_to_offers_dealstack_request(
        &self,
        offer_id: i64,
        offset: i64,
        store_id: i64,
    ) -> ClientResult<RequestBuilder> {
        let token = self.auth_token()?;
        let params = [("offset", offset.to_string()), ("storeId", store_id.to_string())];

        Ok(self
            .request(Method::POST, &format!("exp/v1/offers/dealstack/{offer_id}"))
            .query(&params)
            .bearer_auth(token))
    }

    // DELETE exp/v1/offers/dealstack/offer/{offerPropositionId}
    /// Remove an offer from the dealstack.
    ///
    /// The proposition id comes back as a string in
    /// [`DealStack`](crate::types::response::DealStack), hence the `&str`
    /// here. The API accepts this request without a body, but the app sends
    /// one duplicating the query, so the client does too.
    #[instrument(skip(self))]
    pub async fn remove_from_offers_dealstack(
        &self,
        offer_id: i64,
        offer_proposition_id: &str,
        offset: i64,
        store_id: i64,
    ) -> ClientResult<ClientResponse<OfferDealStackResponse>> {
        let request =
            self.remove_from_offers_dealstack_request(offer_id, offer_proposition_id, offset, store_id)?;
        let response = request.send().await?;
        debug!(status = %response.status(), "remove from dealstack response");

        ClientResponse::from_response(response).await
    }

    /// Builds the delete with `offerId` and `offset` as numbers in the body
    /// but strings in the query, matching what the app sends.
    fn remove_from_offers_dealstack_request(
        &self,
        offer_id: i64,
        offer_proposition_id: &str,
        offset: i64,
        store_id: i64,
    ) -> ClientResult<RequestBuilder> {
        let token = self.auth_token()?;
        let body = serde_json::json!({
            "storeId": store_id.to_string(),
            "offerId": offer_id,
            "offset": offset,
        });
        let params = [
            ("offerId", offer_id.to_string()),
            ("offset", offset.to_string()),
            ("storeId", store_id.to_string()),
        ];

        Ok(self
            .request(
                Method::DELETE,
                &format!("exp/v1/offers/dealstack/offer/{offer_proposition_id}"),
            )
            .json(&body)
            .query(&params)
            .bearer_auth(token))
    }

    // GET exp/v1/restaurant/location
    /// Search for restaurants around a location.
    ///
    /// `filter` selects the response shape, e.g. `summary`.
    #[instrument(skip(self))]
    pub async fn restaurant_location(
        &self,
        distance: f64,
        latitude: f64,
        longitude: f64,
        filter: &str,
    ) -> ClientResult<ClientResponse<RestaurantLocationResponse>> {
        let response = self.restaurant_location_request(distance, latitude, longitude, filter)?.send().await?;
        debug!(status = %response.status(), "restaurant location response");

        ClientResponse::from_response(response).await
    }

    fn restaurant_location_request(
        &self,
        distance: f64,
        latitude: f64,
        longitude: f64,
        filter: &str,
    ) -> ClientResult<RequestBuilder> {
        let token = self.auth_token()?;
        let params = [
            ("distance", distance.to_string()),
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("filter", filter.to_string()),
        ];

        Ok(self
            .request(Method::GET, "exp/v1/restaurant/location")
            .query(&params)
            .bearer_auth(token))
    }

    // GET exp/v1/restaurant/{storeId}
    /// Fetch full information for a single store.
    ///
    /// `store_unique_id_type` names the id scheme of `store_id`, e.g. `NSN`
    /// for the national store number.
    #[instrument(skip(self))]
    pub async fn get_restaurant(
        &self,
        store_id: i64,
        filter: &str,
        store_unique_id_type: &str,
    ) -> ClientResult<ClientResponse<RestaurantResponse>> {
        let response = self.get_restaurant_request(store_id, filter, store_unique_id_type)?.send().await?;
        debug!(status = %response.status(), "restaurant response");

        ClientResponse::from_response(response).await
    }

    fn get_restaurant_request(
        &self,
        store_id: i64,
        filter: &str,
        store_unique_id_type: &str,
    ) -> ClientResult<RequestBuilder> {
        let token = self.auth_token()?;
        let params = [("filter", filter), ("storeUniqueIdType", store_unique_id_type)];

        Ok(self
            .request(Method::GET, &format!("exp/v1/restaurant/{store_id}"))
            .query(&params)
            .bearer_auth(token))
    }

    // GET exp/v1/loyalty/customer/points
    /// Fetch the account's loyalty point balance.
    #[instrument(skip(self))]
    pub async fn get_customer_points(&self) -> ClientResult<ClientResponse<CustomerPointResponse>> {
        let response = self.get_customer_points_request()?.send().await?;
        debug!(status = %response.status(), "customer points response");

        ClientResponse::from_response(response).await
    }

    fn get_customer_points_request(&self) -> ClientResult<RequestBuilder> {
        let token = self.auth_token()?;

        Ok(self
            .request(Method::GET, "exp/v1/loyalty/customer/points")
            .bearer_auth(token))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use reqwest_middleware::ClientBuilder;

    use super::*;

    fn http_client() -> ClientWithMiddleware {
        ClientBuilder::new(reqwest::Client::new()).build()
    }

    fn authed_client(http: &ClientWithMiddleware) -> MaccasClient<'_> {
        let mut client = MaccasClient::new("https://example.test".into(), http, "client-id".into());
        client.set_login_token("login-token");
        client.set_auth_token("auth-token");
        client
    }

    fn query_map(request: &reqwest::Request) -> HashMap<String, String> {
        request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn json_body(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request.body().and_then(|b| b.as_bytes()).expect("request has no body");
        serde_json::from_slice(bytes).expect("body is not JSON")
    }

    #[test]
    fn test_default_headers_present() {
        let http = http_client();
        let client = MaccasClient::new("https://example.test".into(), &http, "client-id".into());

        let request = client.request(Method::GET, "exp/v1/offers").build().unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "https://example.test/exp/v1/offers");

        let headers = request.headers();
        assert_eq!(headers.get("mcd-clientid").unwrap(), "client-id");
        assert_eq!(headers.get("mcd-marketid").unwrap(), MARKET_ID);
        assert_eq!(headers.get("mcd-sourceapp").unwrap(), SOURCE_APP);
        assert_eq!(headers.get("accept-language").unwrap(), ACCEPT_LANGUAGE);
        assert_eq!(headers.get("user-agent").unwrap(), USER_AGENT);

        let uuid = headers.get("mcd-uuid").unwrap().to_str().unwrap();
        assert!(Uuid::parse_str(uuid).is_ok());
    }

    #[test]
    fn test_request_uuid_is_fresh_per_request() {
        let http = http_client();
        let client = MaccasClient::new("https://example.test".into(), &http, "client-id".into());

        let first = client.request(Method::GET, "exp/v1/offers").build().unwrap();
        let second = client.request(Method::GET, "exp/v1/offers").build().unwrap();

        assert_ne!(first.headers().get("mcd-uuid"), second.headers().get("mcd-uuid"));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let http = http_client();
        let client = MaccasClient::new("https://example.test/".into(), &http, "client-id".into());

        let request = client.request(Method::GET, "v1/security/auth/token").build().unwrap();
        assert_eq!(request.url().as_str(), "https://example.test/v1/security/auth/token");
    }

    #[test]
    fn test_security_auth_token_request_shape() {
        let http = http_client();
        let client = MaccasClient::new("https://example.test".into(), &http, "client-id".into());

        let request = client.security_auth_token_request("client-secret").build().unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/v1/security/auth/token");
        assert_eq!(query_map(&request)["grantType"], "client_credentials");

        let headers = request.headers();
        assert_eq!(headers.get("mcd-clientsecret").unwrap(), "client-secret");
        // header() appends, so the form content-type rides alongside the default.
        assert!(headers
            .get_all("content-type")
            .iter()
            .any(|v| v == "application/x-www-form-urlencoded; charset=UTF-8"));
        let authorization = headers.get("authorization").unwrap().to_str().unwrap();
        assert!(authorization.starts_with("Basic "));
    }

    #[test]
    fn test_customer_login_request_shape() {
        let http = http_client();
        let client = authed_client(&http);

        let request = client
            .customer_login_request("user@example.com", "hunter2", "sensor-payload")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/exp/v1/customer/login");

        let headers = request.headers();
        assert_eq!(headers.get(SENSOR_DATA_HEADER).unwrap(), "sensor-payload");
        assert_eq!(headers.get("authorization").unwrap(), "Bearer login-token");

        let body = json_body(&request);
        assert_eq!(body["credentials"]["loginUsername"], "user@example.com");
        assert_eq!(body["credentials"]["type"], "email");
        let device_id = body["deviceId"].as_str().unwrap();
        assert_eq!(device_id.len(), DEVICE_ID_LEN);
        assert!(device_id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_get_offers_request_query() {
        let http = http_client();
        let client = authed_client(&http);

        let request = client.get_offers_request(10000.0, -32.0117, 115.8845, "", 480).unwrap().build().unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().path(), "/exp/v1/offers");
        assert_eq!(request.headers().get("authorization").unwrap(), "Bearer auth-token");

        let query = query_map(&request);
        assert_eq!(query["distance"], "10000");
        assert_eq!(query["latitude"], "-32.0117");
        assert_eq!(query["longitude"], "115.8845");
        assert_eq!(query["optOuts"], "");
        assert_eq!(query["timezoneOffsetInMinutes"], "480");
    }

    #[test]
    fn test_add_to_dealstack_request_path_and_query() {
        let http = http_client();
        let client = authed_client(&http);

        let request = client.add_to_offers_dealstack_request(1139347703, 480, 951488).unwrap().build().unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/exp/v1/offers/dealstack/1139347703");

        let query = query_map(&request);
        assert_eq!(query["offset"], "480");
        assert_eq!(query["storeId"], "951488");
    }

    #[test]
    fn test_remove_from_dealstack_numeric_body_string_query() {
        let http = http_client();
        let client = authed_client(&http);

        let request = client
            .remove_from_offers_dealstack_request(1139347703, "166870", 480, 951488)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.url().path(), "/exp/v1/offers/dealstack/offer/166870");

        // Query carries everything as strings.
        let query = query_map(&request);
        assert_eq!(query["offerId"], "1139347703");
        assert_eq!(query["offset"], "480");
        assert_eq!(query["storeId"], "951488");

        // Body carries offerId and offset as numbers, storeId as a string.
        let body = json_body(&request);
        assert_eq!(body["offerId"], serde_json::json!(1139347703_i64));
        assert_eq!(body["offset"], serde_json::json!(480));
        assert_eq!(body["storeId"], serde_json::json!("951488"));
    }

    #[test]
    fn test_get_restaurant_request_query() {
        let http = http_client();
        let client = authed_client(&http);

        let request = client.get_restaurant_request(951488, "full", "NSN").unwrap().build().unwrap();

        assert_eq!(request.url().path(), "/exp/v1/restaurant/951488");

        let query = query_map(&request);
        assert_eq!(query["filter"], "full");
        assert_eq!(query["storeUniqueIdType"], "NSN");
    }

    #[test]
    fn test_registration_request_carries_sensor_header() {
        let http = http_client();
        let client = authed_client(&http);

        let request = client
            .customer_registration_request(&RegistrationRequest::default(), "sensor-payload")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().path(), "/exp/v1/customer/registration");
        assert_eq!(request.headers().get(SENSOR_DATA_HEADER).unwrap(), "sensor-payload");
        assert_eq!(request.headers().get("authorization").unwrap(), "Bearer login-token");
    }

    #[test]
    fn test_activation_request_uses_put_and_login_token() {
        let http = http_client();
        let client = authed_client(&http);

        let request = client.activate_customer_request(&ActivationRequest::default()).unwrap().build().unwrap();

        assert_eq!(request.method(), Method::PUT);
        assert_eq!(request.url().path(), "/exp/v1/customer/activation");
        assert_eq!(request.headers().get("authorization").unwrap(), "Bearer login-token");
    }

    #[test]
    fn test_device_id_shape() {
        let id = MaccasClient::device_id();
        assert_eq!(id.len(), DEVICE_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

        // Random per call.
        assert_ne!(id, MaccasClient::device_id());
    }

    #[test]
    fn test_debug_omits_tokens() {
        let http = http_client();
        let mut client = MaccasClient::new("https://example.test".into(), &http, "client-id".into());
        client.set_login_token("login-secret");
        client.set_auth_token("auth-secret");

        let debug = format!("{client:?}");
        assert!(!debug.contains("login-secret"));
        assert!(!debug.contains("auth-secret"));
    }

    #[tokio::test]
    async fn test_login_requires_login_token() {
        let http = http_client();
        let client = MaccasClient::new("https://example.test".into(), &http, "client-id".into());

        let err = client.customer_login("user@example.com", "hunter2", "sensor").await.unwrap_err();
        assert!(matches!(err, ClientError::MissingToken { kind: TokenKind::Login }));
    }

    #[tokio::test]
    async fn test_offers_require_auth_token() {
        let http = http_client();
        let client = MaccasClient::new("https://example.test".into(), &http, "client-id".into());

        let err = client.get_offers(10000.0, -32.0117, 115.8845, "", 480).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingToken { kind: TokenKind::Auth }));
    }

    #[tokio::test]
    async fn test_login_token_does_not_satisfy_auth_endpoints() {
        let http = http_client();
        let mut client = MaccasClient::new("https://example.test".into(), &http, "client-id".into());
        client.set_login_token("login-token");

        let err = client.get_customer_points().await.unwrap_err();
        assert!(matches!(err, ClientError::MissingToken { kind: TokenKind::Auth }));
    }
}
