use crate::{
    dto::{DnsQueryParams, FullAnswerResponse, SimpleAnswerResponse, UsageResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use smart_doh_application::use_cases::{RelayedWire, ResolvedQuery};
use smart_doh_domain::{DomainError, GeoOverride, RecordType, ResolutionQuery};
use tracing::{debug, instrument};

const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";
const WIRE_CACHE_CONTROL: &str = "public, max-age=300";

static X_SITE_CATEGORY: HeaderName = HeaderName::from_static("x-site-category");
static X_ROUTING_STRATEGY: HeaderName = HeaderName::from_static("x-routing-strategy");
static X_QUERY_TIME: HeaderName = HeaderName::from_static("x-query-time");
static X_PROXY_FORMAT: HeaderName = HeaderName::from_static("x-proxy-format");
static X_CLIENT_COUNTRY: HeaderName = HeaderName::from_static("x-client-country");

#[instrument(skip(state, headers), name = "api_dns_query_get")]
pub async fn dns_query_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DnsQueryParams>,
) -> Result<Response, ApiError> {
    if let Some(encoded) = params.wire_message() {
        let message = decode_dns_param(encoded)?;
        let relayed = state.relay_wire.execute(message).await?;
        return Ok(wire_response(relayed));
    }

    let Some(domain) = params.domain() else {
        debug!("Query without name or dns parameter");
        return Ok((StatusCode::BAD_REQUEST, Json(UsageResponse::default())).into_response());
    };

    let record_type = parse_record_type(params.record_type.as_deref())?;

    if accepts_wire_format(&headers) {
        let relayed = state
            .relay_wire
            .execute_for_name(domain, record_type)
            .await?;
        return Ok(wire_response(relayed));
    }

    let geo = params.geo.as_deref().and_then(|g| match g.parse::<GeoOverride>() {
        Ok(geo) => Some(geo),
        Err(e) => {
            debug!(error = %e, "Ignoring geo override");
            None
        }
    });
    let country = headers
        .get(state.settings.client_country_header.as_str())
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|c| !c.is_empty() && *c != "XX");

    let query = ResolutionQuery::new(domain, record_type)
        .with_gaming(params.gaming_requested())
        .with_geo(geo)
        .with_client_country(country);

    let resolved = state.resolve_query.execute(&query).await?;
    debug!(
        domain = %domain,
        category = %resolved.metadata.category,
        strategy = %resolved.metadata.routing_strategy,
        substituted = resolved.metadata.substituted,
        query_time_ms = resolved.metadata.query_time_ms,
        "Query resolved"
    );

    Ok(json_response(domain, record_type, &params, country, resolved))
}

#[instrument(skip(state, headers, body), name = "api_dns_query_post")]
pub async fn dns_query_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !content_type.starts_with(DNS_MESSAGE_CONTENT_TYPE) {
        return Err(DomainError::InvalidInput(format!(
            "Unsupported content type {:?}, expected {}",
            content_type, DNS_MESSAGE_CONTENT_TYPE
        ))
        .into());
    }

    let relayed = state.relay_wire.execute(body).await?;
    Ok(wire_response(relayed))
}

/// Accepts both padded and unpadded base64url.
fn decode_dns_param(encoded: &str) -> Result<Bytes, DomainError> {
    URL_SAFE_NO_PAD
        .decode(encoded.trim().trim_end_matches('='))
        .map(Bytes::from)
        .map_err(|e| DomainError::DecodeError(format!("Invalid base64url dns parameter: {}", e)))
}

fn parse_record_type(raw: Option<&str>) -> Result<RecordType, DomainError> {
    match raw.map(str::trim).filter(|t| !t.is_empty()) {
        None => Ok(RecordType::default()),
        Some(t) => t.parse::<RecordType>().map_err(DomainError::InvalidInput),
    }
}

fn accepts_wire_format(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains(DNS_MESSAGE_CONTENT_TYPE))
}

fn json_response(
    domain: &str,
    record_type: RecordType,
    params: &DnsQueryParams,
    country: Option<&str>,
    resolved: ResolvedQuery,
) -> Response {
    let metadata = &resolved.metadata;
    let mut response = if params.wants_simple_format() {
        Json(SimpleAnswerResponse::from_answer(
            domain,
            record_type.as_str(),
            &resolved.answer,
            metadata.category,
        ))
        .into_response()
    } else {
        Json(FullAnswerResponse {
            answer: &resolved.answer,
            metadata,
        })
        .into_response()
    };

    let headers = response.headers_mut();
    set_header(
        headers,
        header::CACHE_CONTROL,
        format!("public, max-age={}", metadata.category.cache_max_age()),
    );
    headers.insert(
        X_SITE_CATEGORY.clone(),
        HeaderValue::from_static(metadata.category.as_str()),
    );
    headers.insert(
        X_ROUTING_STRATEGY.clone(),
        HeaderValue::from_static(metadata.routing_strategy.as_str()),
    );
    set_header(
        headers,
        X_QUERY_TIME.clone(),
        format!("{}ms", metadata.query_time_ms),
    );
    if let Some(country) = country {
        set_header(headers, X_CLIENT_COUNTRY.clone(), country.to_uppercase());
    }

    response
}

fn wire_response(relayed: RelayedWire) -> Response {
    let mut response = (
        [
            (header::CONTENT_TYPE, DNS_MESSAGE_CONTENT_TYPE),
            (header::CACHE_CONTROL, WIRE_CACHE_CONTROL),
        ],
        relayed.message,
    )
        .into_response();

    let headers = response.headers_mut();
    headers.insert(X_PROXY_FORMAT.clone(), HeaderValue::from_static("Wire"));
    if let Some(category) = relayed.category {
        headers.insert(
            X_SITE_CATEGORY.clone(),
            HeaderValue::from_static(category.as_str()),
        );
    }

    response
}

fn set_header(headers: &mut HeaderMap, name: HeaderName, value: String) {
    if let Ok(value) = HeaderValue::from_str(&value) {
        headers.insert(name, value);
    }
}
