//! Liquid templates bundled into the binary.
//!
//! Every page is rendered into its own template first, then wrapped in the
//! shared layout. Liquid does not escape output, so templates apply the
//! `escape` filter to anything that came from a user.

use std::collections::HashMap;
use std::sync::LazyLock;

use axum::response::Html;
use liquid::{Parser, Template};
use serde::Serialize;

const LAYOUT: &str = include_str!("../templates/layout.liquid");

/// Every page the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Venues,
    SearchVenues,
    ShowVenue,
    VenueForm,
    Artists,
    SearchArtists,
    ShowArtist,
    ArtistForm,
    Shows,
    ShowForm,
    NotFound,
    Error,
}

impl Page {
    pub const ALL: [Page; 13] = [
        Page::Home,
        Page::Venues,
        Page::SearchVenues,
        Page::ShowVenue,
        Page::VenueForm,
        Page::Artists,
        Page::SearchArtists,
        Page::ShowArtist,
        Page::ArtistForm,
        Page::Shows,
        Page::ShowForm,
        Page::NotFound,
        Page::Error,
    ];

    fn source(self) -> &'static str {
        match self {
            Page::Home => include_str!("../templates/pages/home.liquid"),
            Page::Venues => include_str!("../templates/pages/venues.liquid"),
            Page::SearchVenues => include_str!("../templates/pages/search_venues.liquid"),
            Page::ShowVenue => include_str!("../templates/pages/show_venue.liquid"),
            Page::VenueForm => include_str!("../templates/forms/venue.liquid"),
            Page::Artists => include_str!("../templates/pages/artists.liquid"),
            Page::SearchArtists => include_str!("../templates/pages/search_artists.liquid"),
            Page::ShowArtist => include_str!("../templates/pages/show_artist.liquid"),
            Page::ArtistForm => include_str!("../templates/forms/artist.liquid"),
            Page::Shows => include_str!("../templates/pages/shows.liquid"),
            Page::ShowForm => include_str!("../templates/forms/show.liquid"),
            Page::NotFound => include_str!("../templates/errors/404.liquid"),
            Page::Error => include_str!("../templates/errors/error.liquid"),
        }
    }

    /// Text for the `<title>` element.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Fyyur",
            Page::Venues | Page::SearchVenues => "Venues | Fyyur",
            Page::ShowVenue => "Venue | Fyyur",
            Page::VenueForm => "Venue Listing | Fyyur",
            Page::Artists | Page::SearchArtists => "Artists | Fyyur",
            Page::ShowArtist => "Artist | Fyyur",
            Page::ArtistForm => "Artist Listing | Fyyur",
            Page::Shows => "Shows | Fyyur",
            Page::ShowForm => "New Show | Fyyur",
            Page::NotFound => "Not Found | Fyyur",
            Page::Error => "Error | Fyyur",
        }
    }
}

/// A one-shot notice shown at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct LayoutContext<'a> {
    title: &'a str,
    content: &'a str,
    flashes: &'a [Flash],
}

/// Parsed layout plus one template per [`Page`].
pub struct Templates {
    layout: Template,
    pages: HashMap<Page, Template>,
}

impl Templates {
    /// Parse the bundled templates.
    pub fn parse() -> Result<Self, liquid::Error> {
        let parser: Parser = liquid::ParserBuilder::with_stdlib().build()?;
        let layout = parser.parse(LAYOUT)?;
        let pages = Page::ALL
            .iter()
            .map(|&page| parser.parse(page.source()).map(|t| (page, t)))
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(Self { layout, pages })
    }

    /// Render `page` with `context`, inside the layout.
    pub fn render<C: Serialize>(
        &self,
        page: Page,
        context: &C,
        flashes: &[Flash],
    ) -> Result<Html<String>, liquid::Error> {
        let template = self
            .pages
            .get(&page)
            .ok_or_else(|| liquid::Error::with_msg(format!("no template for {page:?}")))?;
        let content = template.render(&liquid::to_object(context)?)?;

        let layout_context = liquid::to_object(&LayoutContext {
            title: page.title(),
            content: &content,
            flashes,
        })?;
        Ok(Html(self.layout.render(&layout_context)?))
    }
}

static TEMPLATES: LazyLock<Templates> =
    LazyLock::new(|| Templates::parse().expect("bundled templates must parse"));

/// Parse the templates now so a broken template fails start-up, not a request.
pub fn preload() {
    LazyLock::force(&TEMPLATES);
}

/// Render a page without flash messages.
pub fn render<C: Serialize>(page: Page, context: &C) -> Result<Html<String>, liquid::Error> {
    TEMPLATES.render(page, context, &[])
}

/// Render a page with flash messages above its content.
pub fn render_with_flashes<C: Serialize>(
    page: Page,
    context: &C,
    flashes: &[Flash],
) -> Result<Html<String>, liquid::Error> {
    TEMPLATES.render(page, context, flashes)
}
