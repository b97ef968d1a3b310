use crate::paths::asset_path;
use gamez_core::CatalogEntry;
use yew::prelude::*;

/// One card in a link grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardModel {
    pub id: u32,
    pub name: AttrValue,
    pub logo: AttrValue,
    pub href: AttrValue,
    pub label: AttrValue,
}

impl CardModel {
    #[must_use]
    pub fn play(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: AttrValue::from(entry.display_name().to_string()),
            logo: AttrValue::from(asset_path(&entry.logo)),
            href: AttrValue::from(entry.link.clone()),
            label: AttrValue::Static(entry.play_label()),
        }
    }

    /// `None` for entries without a backend URL.
    #[must_use]
    pub fn admin(entry: &CatalogEntry) -> Option<Self> {
        let href = entry.admin_url.clone()?;
        Some(Self {
            id: entry.id,
            name: AttrValue::from(entry.display_name().to_string()),
            logo: AttrValue::from(asset_path(&entry.logo)),
            href: AttrValue::from(href),
            label: AttrValue::Static("Backend Login"),
        })
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cards: Vec<CardModel>,
    pub empty_message: AttrValue,
}

#[function_component(CatalogGrid)]
pub fn catalog_grid(p: &Props) -> Html {
    if p.cards.is_empty() {
        return html! {
            <p class="empty-results" role="status">{ p.empty_message.clone() }</p>
        };
    }

    html! {
        <ul class="catalog-grid" data-count={p.cards.len().to_string()}>
            { for p.cards.iter().map(|card| html! {
                <li key={card.id} class="catalog-card" data-card={card.name.clone()}>
                    <div class="card-logo">
                        <img src={card.logo.clone()} alt={card.name.clone()} loading="lazy" />
                    </div>
                    <h3 class="card-name">{ card.name.clone() }</h3>
                    <a
                        class="card-link"
                        href={card.href.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        { card.label.clone() }
                    </a>
                </li>
            }) }
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn entry(name: &str, admin: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            id: 7,
            name: name.to_string(),
            logo: "logos/test.png".to_string(),
            link: "https://play.example".to_string(),
            admin_url: admin.map(str::to_string),
        }
    }

    #[test]
    fn admin_cards_require_backend_url() {
        assert!(CardModel::admin(&entry("Juwa", None)).is_none());
        let card = CardModel::admin(&entry("Juwa", Some("https://ops.example"))).expect("card");
        assert_eq!(card.href.as_str(), "https://ops.example");
        assert_eq!(card.label.as_str(), "Backend Login");
    }

    #[test]
    fn play_cards_use_display_name_and_label() {
        let card = CardModel::play(&entry("BIGDADDYDRAGON", None));
        assert_eq!(card.name.as_str(), "BIG DADDY DRAGON");
        assert_eq!(card.label.as_str(), "Play Game");
        assert_eq!(card.logo.as_str(), "/logos/test.png");
    }

    #[test]
    fn empty_grid_shows_message() {
        let props = Props {
            cards: Vec::new(),
            empty_message: "No games match your search.".into(),
        };
        let html = block_on(LocalServerRenderer::<CatalogGrid>::with_props(props).render());
        assert!(html.contains("No games match your search."));
        assert!(!html.contains("catalog-grid"));
    }

    #[test]
    fn cards_open_in_new_tab() {
        let props = Props {
            cards: vec![CardModel::play(&entry("Juwa", None))],
            empty_message: AttrValue::default(),
        };
        let html = block_on(LocalServerRenderer::<CatalogGrid>::with_props(props).render());
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("noopener noreferrer"));
        assert!(html.contains("data-count=\"1\""));
    }
}
