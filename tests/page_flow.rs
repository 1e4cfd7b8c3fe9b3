mod common;

use studio_site::config::SiteConfig;
use studio_site::gallery::{Catalog, Category, GalleryItem, ItemId, YearMonth};
use studio_site::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState};
use studio_site::ui::filter::{FilterCategory, FilterIntent, FilterReducer, FilterState};
use studio_site::ui::mvi::Reducer;
use studio_site::ui::{Direction, Effect, Page, PageEvent, PageLayout};

fn five_item_page() -> Page {
    let items = (0..5)
        .map(|i| GalleryItem {
            id: ItemId::new(format!("session-{}", i)),
            name: format!("Session {}", i),
            description: "Portrait session".to_string(),
            category: Category::ALL[i % Category::ALL.len()],
            date: YearMonth::new(2024, 1 + i as u32).unwrap(),
            image: format!("images/session-{}.jpg", i),
            gallery_id: format!("session-{}", i),
        })
        .collect();
    let catalog = Catalog::new(items, Vec::new()).unwrap();
    let layout = PageLayout {
        has_portfolio: true,
        ..PageLayout::default()
    };
    Page::new(SiteConfig::default(), layout, Ok(catalog))
}

fn id(i: usize) -> ItemId {
    ItemId::new(format!("session-{}", i))
}

#[test]
fn next_n_times_returns_to_first_slide() {
    for len in 1..=7 {
        let mut state = CarouselState::with_len(len);
        for _ in 0..len {
            state = CarouselReducer::reduce(state, CarouselIntent::Next);
        }
        assert_eq!(state.current, 0, "len {}", len);
    }
}

#[test]
fn previous_undoes_next() {
    let mut state = CarouselState::with_len(4);
    for start in 0..4 {
        state = CarouselReducer::reduce(state, CarouselIntent::Show { index: start });
        let forward = CarouselReducer::reduce(state.clone(), CarouselIntent::Next);
        let back = CarouselReducer::reduce(forward, CarouselIntent::Previous);
        assert_eq!(back.current, start);
    }
}

#[test]
fn empty_carousel_ignores_navigation() {
    let empty = CarouselState::with_len(0);
    for intent in [
        CarouselIntent::Next,
        CarouselIntent::Previous,
        CarouselIntent::Show { index: 0 },
        CarouselIntent::StartAutoAdvance,
        CarouselIntent::Tick { generation: 1 },
    ] {
        assert_eq!(CarouselReducer::reduce(empty.clone(), intent), empty);
    }
}

#[test]
fn all_filter_shows_everything_in_order_and_is_idempotent() {
    let catalog = Catalog::builtin();
    let state = FilterReducer::reduce(
        FilterState::default(),
        FilterIntent::Load {
            categories: catalog.categories(),
        },
    );
    let all = FilterReducer::reduce(
        state,
        FilterIntent::Apply {
            category: FilterCategory::All,
        },
    );
    assert_eq!(all.visible, (0..catalog.items().len()).collect::<Vec<_>>());

    let family = FilterCategory::Only(Category::Family);
    let once = FilterReducer::reduce(all, FilterIntent::Apply { category: family });
    let twice = FilterReducer::reduce(once.clone(), FilterIntent::Apply { category: family });
    assert_eq!(once.visible, twice.visible);
    assert!(twice.entering.is_empty());
}

#[test]
fn double_start_then_one_tick_advances_one_slide() {
    let mut page = common::studio_page();
    let mut effects = page.start();
    effects.extend(page.start());

    let generations: Vec<u64> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::StartAutoAdvance { generation, .. } => Some(*generation),
            _ => None,
        })
        .collect();
    assert_eq!(generations.len(), 1);

    page.handle(PageEvent::CarouselTick {
        generation: generations[0],
    });
    assert_eq!(page.carousel().map(|c| c.current), Some(1));
}

#[test]
fn lightbox_walks_the_unfiltered_subset() {
    let mut page = five_item_page();
    page.handle(PageEvent::OpenGallery(id(2)));
    page.handle(PageEvent::LightboxNavigate(Direction::Next));
    assert_eq!(page.lightbox().and_then(|l| l.current()), Some(&id(3)));

    page.handle(PageEvent::OpenGallery(id(4)));
    page.handle(PageEvent::LightboxNavigate(Direction::Next));
    assert_eq!(page.lightbox().and_then(|l| l.current()), Some(&id(0)));
}

#[test]
fn closing_the_lightbox_discards_the_pending_image() {
    let mut page = five_item_page();
    let effects = page.handle(PageEvent::OpenGallery(id(1)));
    let (generation, item) = effects
        .iter()
        .find_map(|e| match e {
            Effect::ResolveImage {
                generation, item, ..
            } => Some((*generation, item.clone())),
            _ => None,
        })
        .unwrap();

    page.handle(PageEvent::LightboxClose);
    let effects = page.handle(PageEvent::ImageResolved {
        generation,
        item,
        outcome: studio_site::ui::lightbox::ResolveOutcome::Loaded,
    });
    assert!(effects.is_empty());
    assert!(!page.lightbox().unwrap().is_open());
}

#[test]
fn unknown_gallery_item_is_recorded_not_opened() {
    let mut page = five_item_page();
    assert!(page
        .handle(PageEvent::OpenGallery(ItemId::new("missing")))
        .is_empty());
    assert!(page.lightbox().is_none());
    assert_eq!(page.errors().len(), 1);
}
