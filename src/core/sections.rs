//! Response models of the content API, one per page section.
//!
//! Every field is optional on the wire: missing keys and `null` become empty
//! strings or collections. Values of the wrong shape (an object where a list
//! is expected, say) still fail to parse.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;

use super::html::word_count;

/// A section model fetched from a fixed endpoint.
pub trait Section: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {
    const ENDPOINT: &'static str;
    /// Label used in failure messages
    const RESOURCE: &'static str;
}

macro_rules! section {
    ($ty:ty, $endpoint:literal, $resource:literal) => {
        impl Section for $ty {
            const ENDPOINT: &'static str = $endpoint;
            const RESOURCE: &'static str = $resource;
        }
    };
}

/// `null` deserializes to `T::default()`.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a string, a number, a bool or `null` and keeps it as text.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected text, found {}",
            match other {
                Value::Array(_) => "a list",
                _ => "an object",
            }
        ))),
    }
}

/// Heading block most sections carry as `page[0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    #[serde(deserialize_with = "text")]
    pub heading: String,
    #[serde(deserialize_with = "text")]
    pub subheading: String,
}

fn first_heading(page: &[PageInfo], fallback: &str) -> String {
    page.first()
        .map(|p| p.heading.trim())
        .filter(|h| !h.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

fn or_fallback(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Header / hero
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeroBanner {
    #[serde(deserialize_with = "nullable")]
    pub desktop: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub mobile: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderSection {
    #[serde(deserialize_with = "text")]
    pub logo: String,
    #[serde(deserialize_with = "text")]
    pub property_name: String,
    #[serde(deserialize_with = "text")]
    pub location: String,
    #[serde(deserialize_with = "text")]
    pub sublocation: String,
    #[serde(deserialize_with = "text")]
    pub hero_banner_heading: String,
    #[serde(deserialize_with = "text")]
    pub hero_banner_subheading: String,
    #[serde(deserialize_with = "nullable")]
    pub hero_banner_img: HeroBanner,
    #[serde(deserialize_with = "text")]
    pub property_type_price_range_text: String,
    #[serde(deserialize_with = "text")]
    pub property_area_min_max: String,
}
section!(HeaderSection, "/header", "header data");

impl HeaderSection {
    pub fn hero_image(&self) -> Option<&str> {
        self.hero_banner_img
            .desktop
            .iter()
            .chain(self.hero_banner_img.mobile.iter())
            .map(String::as_str)
            .find(|src| !src.trim().is_empty())
    }

    /// "Sublocation, Location" with empty parts skipped
    pub fn address(&self) -> String {
        [self.sublocation.trim(), self.location.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ---------------------------------------------------------------------------
// Property details
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertyDetails {
    #[serde(deserialize_with = "text")]
    pub property_name: String,
    #[serde(deserialize_with = "text")]
    pub property_description: String,
    #[serde(deserialize_with = "text")]
    pub property_information: String,
    #[serde(deserialize_with = "text")]
    pub property_specification: String,
    #[serde(deserialize_with = "text")]
    pub og_image: String,
    #[serde(deserialize_with = "text")]
    pub builder_name: String,
    #[serde(deserialize_with = "text")]
    pub sub_location: String,
    #[serde(deserialize_with = "text")]
    pub property_type: String,
    #[serde(deserialize_with = "text")]
    pub property_price_range: String,
    #[serde(deserialize_with = "text")]
    pub property_type_price_range: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertyDetailsSection {
    #[serde(deserialize_with = "nullable")]
    pub property_details: PropertyDetails,
}
section!(PropertyDetailsSection, "/propert-details", "property details");

// ---------------------------------------------------------------------------
// Amenities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Amenity {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub amenity_name: String,
    #[serde(deserialize_with = "text")]
    pub property_amenities_photo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AmenityGroup {
    #[serde(deserialize_with = "nullable")]
    pub amenities: Vec<Amenity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AmenitiesSection {
    #[serde(deserialize_with = "nullable")]
    pub amenities: AmenityGroup,
}
section!(AmenitiesSection, "/amenities", "amenities data");

impl AmenitiesSection {
    pub fn items(&self) -> &[Amenity] {
        &self.amenities.amenities
    }
}

// ---------------------------------------------------------------------------
// Banks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Bank {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub bank_name: String,
    #[serde(deserialize_with = "text")]
    pub bank_slug: String,
    #[serde(deserialize_with = "text")]
    pub property_bank_photo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BankGroup {
    #[serde(deserialize_with = "nullable")]
    pub banks: Vec<Bank>,
    #[serde(deserialize_with = "nullable")]
    pub page: PageInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BanksSection {
    #[serde(deserialize_with = "nullable")]
    pub bank: BankGroup,
}
section!(BanksSection, "/banks", "banks data");

impl BanksSection {
    pub fn heading(&self) -> String {
        or_fallback(&self.bank.page.heading, "Home Loan Partners")
    }
}

// ---------------------------------------------------------------------------
// Blogs
// ---------------------------------------------------------------------------

pub const WORDS_PER_MINUTE: usize = 225;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub post_title: String,
    #[serde(deserialize_with = "text")]
    pub post_slug: String,
    #[serde(deserialize_with = "text")]
    pub post_content: String,
    #[serde(deserialize_with = "text")]
    pub post_content_short: String,
    #[serde(deserialize_with = "text")]
    pub post_photo: String,
    #[serde(deserialize_with = "text")]
    pub created_at: String,
}

impl BlogPost {
    /// Estimated minutes to read the full post, at least one.
    pub fn reading_minutes(&self) -> usize {
        word_count(&self.post_content).div_ceil(WORDS_PER_MINUTE).max(1)
    }

    /// `2024-11-25 16:42:02` becomes `Nov 25, 2024`; unknown formats are shown as-is.
    pub fn published_on(&self) -> String {
        format_post_date(&self.created_at)
    }

    /// Route of the detail page; falls back to the id when the slug is empty.
    pub fn path(&self) -> String {
        let key = if self.post_slug.trim().is_empty() {
            self.id.trim()
        } else {
            self.post_slug.trim()
        };
        format!("/blogs/{key}")
    }
}

pub fn format_post_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| chrono::DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlogsSection {
    #[serde(deserialize_with = "nullable")]
    pub blogs: Vec<BlogPost>,
}
section!(BlogsSection, "/blogs", "blogs data");

impl BlogsSection {
    /// Endpoint of a single post; the response has the same shape as the list.
    pub fn post_endpoint(id: &str) -> String {
        format!("{}/{}", Self::ENDPOINT, id.trim_matches('/'))
    }

    pub fn first(&self) -> Option<&BlogPost> {
        self.blogs.first()
    }
}

pub const BLOGS_PER_PAGE: usize = 3;

/// Number of pages needed for `len` items; zero items still make one page.
pub fn page_count(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page.max(1)).max(1)
}

/// Items of the 1-based `page`, clamped to the valid range.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let page = page.clamp(1, page_count(items.len(), per_page));
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    &items[start.min(end)..end]
}

// ---------------------------------------------------------------------------
// FAQ
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Faq {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub faq_title: String,
    #[serde(deserialize_with = "text")]
    pub faq_content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FaqSection {
    #[serde(deserialize_with = "nullable")]
    pub faqs: Vec<Faq>,
    #[serde(deserialize_with = "nullable")]
    pub page: Vec<PageInfo>,
}
section!(FaqSection, "/faq", "FAQ data");

impl FaqSection {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Frequently Asked Questions")
    }
}

// ---------------------------------------------------------------------------
// Floor plans
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FloorPlan {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub layout_name: String,
    #[serde(deserialize_with = "text")]
    pub layout_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FloorPlansSection {
    #[serde(rename = "Floor_plans", deserialize_with = "nullable")]
    pub floor_plans: Vec<FloorPlan>,
    #[serde(deserialize_with = "nullable")]
    pub page: Vec<PageInfo>,
}
section!(FloorPlansSection, "/floor-layout", "floor plans data");

impl FloorPlansSection {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Floor Plans")
    }
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryPhoto {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub photo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GallerySection {
    #[serde(deserialize_with = "nullable")]
    pub property_photos: Vec<GalleryPhoto>,
    #[serde(deserialize_with = "nullable")]
    pub page: Vec<PageInfo>,
}
section!(GallerySection, "/gallary", "gallery data");

impl GallerySection {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Property Gallery")
    }
}

// ---------------------------------------------------------------------------
// Location map and advantages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationMapSection {
    #[serde(deserialize_with = "text")]
    pub heading: String,
    #[serde(deserialize_with = "text")]
    pub subheading: String,
    /// Embed markup, usually an iframe
    #[serde(deserialize_with = "text")]
    pub map: String,
}
section!(LocationMapSection, "/location-map", "location data");

impl LocationMapSection {
    pub fn heading(&self) -> String {
        or_fallback(&self.heading, "Location")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationAdvantage {
    #[serde(deserialize_with = "text")]
    pub location: String,
    #[serde(deserialize_with = "text")]
    pub distance: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationAdvantagesSection {
    #[serde(deserialize_with = "nullable")]
    pub location_advantages: Vec<LocationAdvantage>,
    #[serde(deserialize_with = "nullable")]
    pub page: Vec<PageInfo>,
}
section!(
    LocationAdvantagesSection,
    "/location-advantages",
    "location advantages"
);

impl LocationAdvantagesSection {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Location Highlights")
    }
}

// ---------------------------------------------------------------------------
// Master layout and unit layouts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MasterLayout {
    #[serde(deserialize_with = "text")]
    pub layout_name: String,
    #[serde(deserialize_with = "text")]
    pub layout_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MasterLayoutSection {
    #[serde(deserialize_with = "nullable")]
    pub master_layout: Vec<MasterLayout>,
    #[serde(deserialize_with = "nullable")]
    pub page: Vec<PageInfo>,
}
section!(MasterLayoutSection, "/master-layout", "master layout data");

impl MasterLayoutSection {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Master Layout")
    }

    pub fn layout(&self) -> Option<&MasterLayout> {
        self.master_layout.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UnitLayout {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub layout_name: String,
    #[serde(deserialize_with = "text")]
    pub layout_image: String,
    #[serde(deserialize_with = "text")]
    pub unit_layout_heading: String,
    #[serde(deserialize_with = "text")]
    pub unit_layout_carpet_area: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UnitLayoutsSection {
    #[serde(deserialize_with = "nullable")]
    pub unit_layout: Vec<UnitLayout>,
    #[serde(deserialize_with = "nullable")]
    pub page: Vec<PageInfo>,
}
section!(UnitLayoutsSection, "/unit-layout", "unit layouts");

impl UnitLayout {
    /// Image URL with the doubled `//uploads` segment some records carry collapsed.
    pub fn image_url(&self) -> String {
        self.layout_image.replace("//uploads", "/uploads")
    }

    pub fn carpet_area(&self) -> &str {
        match self.unit_layout_carpet_area.trim() {
            "" => "N/A",
            area => area,
        }
    }
}

impl UnitLayoutsSection {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Unit Layouts")
    }
}

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertyPrice {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub property_type: String,
    #[serde(deserialize_with = "text")]
    pub property_tower: String,
    #[serde(deserialize_with = "text")]
    pub property_carpet_sqft: String,
    #[serde(deserialize_with = "text")]
    pub carpet_unit_sqft: String,
    #[serde(deserialize_with = "text")]
    pub property_configuration: String,
}

impl PropertyPrice {
    pub fn configuration(&self) -> String {
        or_fallback(&self.property_configuration, "Premium Layout")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertyPricesSection {
    #[serde(deserialize_with = "nullable")]
    pub property_prices: Vec<PropertyPrice>,
    #[serde(deserialize_with = "nullable")]
    pub page: Vec<PageInfo>,
}
section!(PropertyPricesSection, "/property-prices", "property prices");

impl PropertyPricesSection {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "Premium Property Collection")
    }
}

// ---------------------------------------------------------------------------
// RERA
// ---------------------------------------------------------------------------

pub const RERA_PORTAL_URL: &str = "https://maharera.maharashtra.gov.in/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReraRecord {
    #[serde(deserialize_with = "text")]
    pub rera_id: String,
    #[serde(deserialize_with = "text")]
    pub phase_name: String,
    #[serde(deserialize_with = "text")]
    pub rera_url: String,
    #[serde(deserialize_with = "text")]
    pub total_area: String,
    #[serde(deserialize_with = "text")]
    pub total_acre: String,
    #[serde(deserialize_with = "text")]
    pub total_tower: String,
    #[serde(deserialize_with = "text")]
    pub completion_date: String,
    #[serde(deserialize_with = "text")]
    pub total_units: String,
}

impl ReraRecord {
    pub fn portal_url(&self) -> String {
        or_fallback(&self.rera_url, RERA_PORTAL_URL)
    }

    pub fn registration_id(&self) -> String {
        or_fallback(&self.rera_id, "Coming Soon")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReraSection {
    #[serde(deserialize_with = "nullable")]
    pub rera: Vec<ReraRecord>,
    #[serde(deserialize_with = "nullable")]
    pub page: Vec<PageInfo>,
}
section!(ReraSection, "/rera", "RERA data");

impl ReraSection {
    pub fn heading(&self) -> String {
        first_heading(&self.page, "RERA Information")
    }

    pub fn subheading(&self) -> String {
        let sub = self.page.first().map(|p| p.subheading.as_str()).unwrap_or("");
        or_fallback(sub, "Project Registration Details")
    }
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    #[serde(deserialize_with = "text")]
    pub footer_agent_rera: String,
    /// Disclaimer HTML; the API spells the key this way
    #[serde(rename = "footer_disclamer", deserialize_with = "text")]
    pub footer_disclaimer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FooterSection {
    #[serde(deserialize_with = "nullable")]
    pub g_setting: GlobalSettings,
}
section!(FooterSection, "/footer", "footer data");

// ---------------------------------------------------------------------------
// Video tour
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PropertyVideo {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub youtube_video_id: String,
}

impl PropertyVideo {
    /// Autoplaying, looping embed URL
    pub fn embed_url(&self, muted: bool) -> String {
        let id = self.youtube_video_id.trim();
        format!(
            "https://www.youtube.com/embed/{id}?autoplay=1&loop=1&mute={}&playlist={id}",
            u8::from(muted)
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VideoSection {
    #[serde(deserialize_with = "nullable")]
    pub property_videos: Vec<PropertyVideo>,
}
section!(VideoSection, "/video", "video data");

impl VideoSection {
    /// The first video, if it points at a YouTube id
    pub fn featured(&self) -> Option<&PropertyVideo> {
        self.property_videos
            .first()
            .filter(|v| !v.youtube_video_id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse<S: Section>(value: serde_json::Value) -> Result<S, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_faq_parses_items_and_heading() {
        let faq: FaqSection = parse(json!({
            "faqs": [{"id": 1, "faq_title": "Possession?", "faq_content": "<p>2026</p>"}],
            "page": [{"heading": "Questions"}]
        }))
        .unwrap();

        assert_eq!(faq.faqs.len(), 1);
        assert_eq!(faq.faqs[0].id, "1");
        assert_eq!(faq.heading(), "Questions");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let faq: FaqSection = parse(json!({})).unwrap();
        assert!(faq.faqs.is_empty());
        assert_eq!(faq.heading(), "Frequently Asked Questions");

        let header: HeaderSection = parse(json!({"hero_banner_img": null, "logo": null})).unwrap();
        assert_eq!(header.hero_image(), None);
        assert_eq!(header.logo, "");
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(parse::<FaqSection>(json!({"faqs": "none"})).is_err());
        assert!(parse::<GallerySection>(json!({"property_photos": {"photo": "a.jpg"}})).is_err());
        assert!(parse::<FaqSection>(json!({"faqs": [{"faq_title": ["x"]}]})).is_err());
    }

    #[test]
    fn test_floor_plans_use_capitalized_key() {
        let plans: FloorPlansSection = parse(json!({
            "Floor_plans": [{"id": 3, "layout_name": "Tower A", "layout_image": "a.png"}]
        }))
        .unwrap();
        assert_eq!(plans.floor_plans[0].layout_name, "Tower A");
        assert_eq!(plans.heading(), "Floor Plans");
    }

    #[test]
    fn test_header_hero_image_and_address() {
        let header: HeaderSection = parse(json!({
            "location": "Pune",
            "sublocation": "Baner",
            "hero_banner_img": {"desktop": ["", "hero.jpg"]}
        }))
        .unwrap();
        assert_eq!(header.hero_image(), Some("hero.jpg"));
        assert_eq!(header.address(), "Baner, Pune");
    }

    #[test]
    fn test_banks_heading_from_page_object() {
        let banks: BanksSection = parse(json!({
            "bank": {"banks": [{"id": 1, "bank_name": "HDFC"}], "page": {"heading": "Loan Partners"}}
        }))
        .unwrap();
        assert_eq!(banks.bank.banks[0].bank_name, "HDFC");
        assert_eq!(banks.heading(), "Loan Partners");
    }

    #[test]
    fn test_numeric_fields_become_text() {
        let prices: PropertyPricesSection = parse(json!({
            "property_prices": [{"id": 9, "property_carpet_sqft": 1150.5, "property_configuration": ""}]
        }))
        .unwrap();
        let price = &prices.property_prices[0];
        assert_eq!(price.property_carpet_sqft, "1150.5");
        assert_eq!(price.configuration(), "Premium Layout");
        assert_eq!(prices.heading(), "Premium Property Collection");
    }

    #[test]
    fn test_blog_reading_time_and_date() {
        let words = vec!["word"; 451].join(" ");
        let post = BlogPost {
            post_content: format!("<p>{words}</p>"),
            created_at: "2024-11-25 16:42:02".to_string(),
            post_slug: "new-launch".to_string(),
            ..Default::default()
        };
        assert_eq!(post.reading_minutes(), 3);
        assert_eq!(post.published_on(), "Nov 25, 2024");
        assert_eq!(post.path(), "/blogs/new-launch");

        let empty = BlogPost {
            id: "4".to_string(),
            ..Default::default()
        };
        assert_eq!(empty.reading_minutes(), 1);
        assert_eq!(empty.path(), "/blogs/4");
    }

    #[test]
    fn test_post_date_formats() {
        assert_eq!(format_post_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_post_date("2024-03-09T10:00:00Z"), "Mar 9, 2024");
        assert_eq!(format_post_date("last week"), "last week");
    }

    #[test]
    fn test_blog_pagination() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(page_count(items.len(), BLOGS_PER_PAGE), 3);
        assert_eq!(page_slice(&items, 1, BLOGS_PER_PAGE), &[1, 2, 3]);
        assert_eq!(page_slice(&items, 3, BLOGS_PER_PAGE), &[7]);
        assert_eq!(page_slice(&items, 9, BLOGS_PER_PAGE), &[7]);
        assert_eq!(page_count(0, BLOGS_PER_PAGE), 1);
        assert!(page_slice::<u32>(&[], 1, BLOGS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_post_endpoint() {
        assert_eq!(BlogsSection::post_endpoint("new-launch"), "/blogs/new-launch");
    }

    #[test]
    fn test_rera_fallbacks() {
        let rera: ReraSection = parse(json!({"rera": [{"rera_id": ""}], "page": []})).unwrap();
        assert_eq!(rera.heading(), "RERA Information");
        assert_eq!(rera.subheading(), "Project Registration Details");
        assert_eq!(rera.rera[0].registration_id(), "Coming Soon");
        assert_eq!(rera.rera[0].portal_url(), RERA_PORTAL_URL);
    }

    #[test]
    fn test_footer_disclaimer_key() {
        let footer: FooterSection = parse(json!({
            "g_setting": {"footer_agent_rera": "A5123", "footer_disclamer": "<p>Not an offer</p>"}
        }))
        .unwrap();
        assert_eq!(footer.g_setting.footer_disclaimer, "<p>Not an offer</p>");
    }

    #[test]
    fn test_video_embed() {
        let videos: VideoSection = parse(json!({
            "property_videos": [{"id": 1, "youtube_video_id": "abc123"}]
        }))
        .unwrap();
        let video = videos.featured().unwrap();
        assert_eq!(
            video.embed_url(true),
            "https://www.youtube.com/embed/abc123?autoplay=1&loop=1&mute=1&playlist=abc123"
        );

        let none: VideoSection = parse(json!({"property_videos": [{"youtube_video_id": ""}]})).unwrap();
        assert!(none.featured().is_none());
    }

    #[test]
    fn test_master_layout_first_entry() {
        let master: MasterLayoutSection = parse(json!({
            "master_layout": [{"layout_name": "Phase 1", "layout_image": "m.png"}]
        }))
        .unwrap();
        assert_eq!(master.layout().map(|l| l.layout_name.as_str()), Some("Phase 1"));
    }

    #[test]
    fn test_unit_layout_image_and_area() {
        let units: UnitLayoutsSection = parse(json!({
            "unit_layout": [
                {"layout_image": "https://cdn.example.com//uploads/u1.png", "unit_layout_carpet_area": 640},
                {"layout_image": "u2.png", "unit_layout_carpet_area": " "}
            ]
        }))
        .unwrap();
        assert_eq!(units.unit_layout[0].image_url(), "https://cdn.example.com/uploads/u1.png");
        assert_eq!(units.unit_layout[0].carpet_area(), "640");
        assert_eq!(units.unit_layout[1].carpet_area(), "N/A");
        assert_eq!(units.heading(), "Unit Layouts");
    }
}
