//! Car Detail Modal
//!
//! Image carousel with details and thumbnails. Shared by the home and
//! search views; each open gets a fresh carousel starting at image 0.

use leptos::prelude::*;

use crate::carousel::Carousel;
use crate::components::TagChips;
use crate::models::{CarRecord, Image};

#[component]
pub fn CarDetailModal(car: CarRecord, on_close: Callback<()>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(car.images.len()));
    let sources = StoredValue::new(car.images.iter().map(Image::src).collect::<Vec<_>>());
    let title = car.title.clone();

    let current_src = move || {
        let index = carousel.get().index();
        sources.with_value(|s| s.get(index).cloned().flatten())
    };

    let thumbnails = (car.images.len() > 1).then(|| {
        view! {
            <div class="thumbnails">
                {sources.with_value(|s| s.clone()).into_iter().enumerate().map(|(i, src)| {
                    let class = move || {
                        if carousel.get().index() == i { "thumb active" } else { "thumb" }
                    };
                    view! {
                        <button class=class on:click=move |_| carousel.update(|c| c.select(i))>
                            {match src {
                                Some(src) => view! { <img src=src alt=format!("Thumbnail {}", i + 1) /> }.into_any(),
                                None => view! { <span class="thumb-placeholder">{i + 1}</span> }.into_any(),
                            }}
                        </button>
                    }
                }).collect_view()}
            </div>
        }
    });

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal car-detail" on:click=|ev| ev.stop_propagation()>
                <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>

                <div class="slider">
                    {move || match current_src() {
                        Some(src) => {
                            let alt = format!("{} - Image {}", title, carousel.get().index() + 1);
                            view! { <img class="slide" src=src alt=alt /> }.into_any()
                        }
                        None => view! { <div class="slide placeholder">"No image"</div> }.into_any(),
                    }}
                    <Show when=move || carousel.get().has_prev()>
                        <button class="slide-nav prev" on:click=move |_| carousel.update(Carousel::prev)>"‹"</button>
                    </Show>
                    <Show when=move || carousel.get().has_next()>
                        <button class="slide-nav next" on:click=move |_| carousel.update(Carousel::next)>"›"</button>
                    </Show>
                    <div class="slide-counter">{move || carousel.get().counter()}</div>
                </div>

                <div class="details">
                    <h2>{car.title.clone()}</h2>
                    <p>{car.desc.clone()}</p>
                    <TagChips tags=car.tags.clone() />
                </div>

                {thumbnails}
            </div>
        </div>
    }
}
