//! Advertising zone: fetches the zone's creatives, rotates them and
//! reports one impression per mount plus clicks.

use std::rc::Rc;
use std::time::Duration;

use api::services::banners;
use api::ApiClient;
use dioxus::prelude::*;
use store::banner::{Carousel, ImpressionLatch, IMPRESSION_THRESHOLD};
use store::models::{Banner, BannerZone};

use crate::browser::{self, Visibility};
use crate::feedback::sleep;
use crate::{use_api, use_config};

/// Renders nothing when the zone has no active creatives.
#[component]
pub fn BannerArea(zone: BannerZone, #[props(default)] tournament_id: Option<i64>) -> Element {
    let api = use_api();
    let rotation = Duration::from_secs(u64::from(use_config().banners.rotation_secs.max(1)));
    let visibility = use_hook(Visibility::browser);
    let impressions = use_hook(|| ImpressionSink::new(move |id| report(api.peek().clone(), id, Tracked::Impression)));

    let creatives = use_resource(use_reactive!(|zone, tournament_id| async move {
        let client = api.peek().clone();
        match banners::active(&client, zone, tournament_id).await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(zone = zone.as_query(), error = %e, "banners unavailable");
                Vec::new()
            }
        }
    }));

    let Some(list) = creatives.read().clone() else {
        return rsx! {};
    };
    if list.is_empty() {
        return rsx! {};
    }

    // A different set of creatives is a fresh mount with its own latch.
    let mount_key = list.iter().map(|b| b.id.to_string()).collect::<Vec<_>>().join("-");

    rsx! {
        BannerCarousel {
            key: "{mount_key}",
            element_id: format!("banner-zone-{}", zone.as_query().to_lowercase()),
            creatives: list,
            rotation,
            visibility,
            impressions,
        }
    }
}

/// Where impressions go. Called from the visibility callback, which runs
/// outside any component.
#[derive(Clone)]
pub struct ImpressionSink(Rc<dyn Fn(i64)>);

impl ImpressionSink {
    pub fn new(record: impl Fn(i64) + 'static) -> Self {
        Self(Rc::new(record))
    }

    fn record(&self, banner_id: i64) {
        (self.0)(banner_id)
    }
}

impl PartialEq for ImpressionSink {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The creative to credit for a visibility change, at most once per latch.
fn on_visibility(latch: &mut ImpressionLatch, ratio: f64, carousel: &Carousel, ids: &[i64]) -> Option<i64> {
    if !latch.observe(ratio) {
        return None;
    }
    ids.get(carousel.index()).copied()
}

#[component]
fn BannerCarousel(
    element_id: String,
    creatives: Vec<Banner>,
    rotation: Duration,
    visibility: Visibility,
    impressions: ImpressionSink,
) -> Element {
    let mut carousel = use_signal(|| Carousel::new(creatives.len()));

    // One task per mount. It owns the visibility watch, so unmounting
    // stops the rotation and disconnects the observer together.
    use_hook(|| {
        let ids: Vec<i64> = creatives.iter().map(|b| b.id).collect();
        let element_id = element_id.clone();
        let visibility = visibility.clone();
        let impressions = impressions.clone();
        spawn(async move {
            let mut latch = ImpressionLatch::default();
            let _watch = visibility.watch(
                &element_id,
                IMPRESSION_THRESHOLD,
                Box::new(move |ratio| {
                    if let Some(id) = on_visibility(&mut latch, ratio, &carousel.peek(), &ids) {
                        impressions.record(id);
                    }
                }),
            );
            loop {
                sleep(rotation).await;
                if carousel.peek().rotates() {
                    carousel.write().advance();
                }
            }
        })
    });

    let index = carousel.read().index().min(creatives.len().saturating_sub(1));
    let Some(current) = creatives.get(index).cloned() else {
        return rsx! {};
    };

    rsx! {
        aside { class: "banner-zone", id: "{element_id}",
            BannerCreative { banner: current }
            if creatives.len() > 1 {
                div { class: "banner-zone__dots",
                    for i in 0..creatives.len() {
                        button {
                            key: "{i}",
                            class: dot_class(i == index),
                            aria_label: format!("Ver anuncio {}", i + 1),
                            onclick: move |_| carousel.write().go_to(i),
                        }
                    }
                }
            }
        }
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "dot dot--active"
    } else {
        "dot"
    }
}

#[component]
fn BannerCreative(banner: Banner) -> Element {
    let api = use_api();
    let id = banner.id;
    let link = banner.link_url.clone();

    // Record first, then open the tab while the click still counts as a
    // user gesture.
    let onclick = move |_: MouseEvent| {
        report(api.peek().clone(), id, Tracked::Click);
        if let Some(url) = &link {
            browser::open_in_new_tab(url);
        }
    };

    rsx! {
        button { class: "banner", title: "{banner.titulo}", onclick: onclick,
            img { src: "{banner.imagen_url}", alt: "{banner.titulo}" }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Tracked {
    Impression,
    Click,
}

/// Fire-and-forget, detached from any component so it survives unmount.
fn report(api: ApiClient, banner_id: i64, event: Tracked) {
    let send = async move {
        let result = match event {
            Tracked::Impression => banners::record_impression(&api, banner_id).await,
            Tracked::Click => banners::record_click(&api, banner_id).await,
        };
        match result {
            Ok(()) => tracing::debug!(banner_id, ?event, "banner event recorded"),
            Err(e) => tracing::warn!(banner_id, ?event, error = %e, "banner event not recorded"),
        }
    };
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(send);
    #[cfg(not(target_arch = "wasm32"))]
    drop(send);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use std::cell::{Cell, RefCell};

    use api::ClientConfig;
    use dioxus_core::{NoOpMutations, ScopeId, VirtualDom};

    use crate::browser::VisibilitySource;

    #[test]
    fn visibility_credits_current_creative_once() {
        let ids = [11, 22, 33];
        let mut carousel = Carousel::new(ids.len());
        carousel.advance();
        let mut latch = ImpressionLatch::default();

        assert_eq!(on_visibility(&mut latch, 0.2, &carousel, &ids), None);
        assert_eq!(on_visibility(&mut latch, 0.6, &carousel, &ids), Some(22));
        assert_eq!(on_visibility(&mut latch, 1.0, &carousel, &ids), None);
        assert_eq!(on_visibility(&mut latch, 0.0, &carousel, &ids), None);
        assert_eq!(on_visibility(&mut latch, 0.9, &carousel, &ids), None);

        let mut remounted = ImpressionLatch::default();
        assert_eq!(on_visibility(&mut remounted, 0.5, &carousel, &ids), Some(22));
    }

    /// Hands the observer callback to the test and flags when the watch
    /// handle is dropped.
    #[derive(Default)]
    struct FakeVisibility {
        callback: Rc<RefCell<Option<Box<dyn FnMut(f64)>>>>,
        watched: Rc<Cell<u32>>,
        released: Rc<Cell<bool>>,
    }

    struct WatchHandle(Rc<Cell<bool>>);

    impl Drop for WatchHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl VisibilitySource for FakeVisibility {
        fn watch(&self, _element_id: &str, _threshold: f64, on_change: Box<dyn FnMut(f64)>) -> Option<Box<dyn Any>> {
            self.watched.set(self.watched.get() + 1);
            *self.callback.borrow_mut() = Some(on_change);
            Some(Box::new(WatchHandle(self.released.clone())))
        }
    }

    fn banner(id: i64) -> Banner {
        Banner {
            id,
            titulo: format!("Anuncio {id}"),
            imagen_url: format!("https://cdn.example/{id}.png"),
            link_url: None,
        }
    }

    #[derive(Props, Clone)]
    struct HarnessProps {
        visibility: Visibility,
        impressions: ImpressionSink,
        shown: Rc<Cell<bool>>,
    }

    impl PartialEq for HarnessProps {
        fn eq(&self, other: &Self) -> bool {
            self.visibility == other.visibility && self.impressions == other.impressions
        }
    }

    #[allow(non_snake_case)]
    fn Harness(props: HarnessProps) -> Element {
        use_context_provider(|| Signal::new(ApiClient::new(&ClientConfig::default())));
        if !props.shown.get() {
            return rsx! {};
        }
        rsx! {
            BannerCarousel {
                element_id: "banner-zone-home",
                creatives: vec![banner(7), banner(8)],
                rotation: Duration::from_secs(3600),
                visibility: props.visibility.clone(),
                impressions: props.impressions.clone(),
            }
        }
    }

    async fn settle(dom: &mut VirtualDom) {
        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
    }

    #[tokio::test]
    async fn mounted_zone_reports_once_and_releases_on_unmount() {
        let fake = FakeVisibility::default();
        let callback = fake.callback.clone();
        let watched = fake.watched.clone();
        let released = fake.released.clone();

        let recorded = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let recorded = recorded.clone();
            ImpressionSink::new(move |id| recorded.borrow_mut().push(id))
        };
        let shown = Rc::new(Cell::new(true));

        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                visibility: Visibility::new(fake),
                impressions: sink,
                shown: shown.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;
        assert_eq!(watched.get(), 1);

        dom.in_runtime(|| {
            let mut guard = callback.borrow_mut();
            let on_change = guard.as_mut().expect("watch registered");
            for ratio in [0.6, 0.9, 0.1, 0.7, 1.0] {
                on_change(ratio);
            }
        });
        assert_eq!(*recorded.borrow(), vec![7]);
        assert!(!released.get());

        shown.set(false);
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
        settle(&mut dom).await;

        assert!(released.get(), "watch outlived the zone");
        assert_eq!(watched.get(), 1);
    }
}
