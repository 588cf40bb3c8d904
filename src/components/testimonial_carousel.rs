//! Testimonial Carousel
//!
//! Rotates through client quotes with previous/next controls.

use leptos::prelude::*;

use crate::models::Testimonial;

/// Index of the next slide, wrapping at the end
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Index of the previous slide, wrapping at the start
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

#[component]
pub fn TestimonialCarousel(testimonials: Vec<Testimonial>) -> impl IntoView {
    let (index, set_index) = signal(0usize);
    let len = testimonials.len();
    let items = StoredValue::new(testimonials);

    view! {
        <section class="testimonial-carousel">
            <h2>"What Our Clients Say"</h2>

            {move || {
                items
                    .with_value(|items| items.get(index.get()).cloned())
                    .map(|t| view! {
                        <blockquote class="testimonial">
                            <p class="testimonial-quote">{t.quote}</p>
                            <footer>
                                <span class="testimonial-name">{t.name}</span>
                                <span class="testimonial-location">{t.location}</span>
                            </footer>
                        </blockquote>
                    })
            }}

            <Show when=move || { len > 1 }>
                <div class="carousel-controls">
                    <button
                        class="carousel-btn"
                        on:click=move |_| set_index.update(|i| *i = prev_index(*i, len))
                    >
                        "‹"
                    </button>
                    <span class="carousel-position">
                        {move || format!("{} / {}", index.get() + 1, len)}
                    </span>
                    <button
                        class="carousel-btn"
                        on:click=move |_| set_index.update(|i| *i = next_index(*i, len))
                    >
                        "›"
                    </button>
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_the_first_slide() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
    }

    #[test]
    fn prev_wraps_to_the_last_slide() {
        assert_eq!(prev_index(2, 3), 1);
        assert_eq!(prev_index(0, 3), 2);
    }

    #[test]
    fn single_slide_always_stays_put() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }

    #[test]
    fn empty_carousel_never_panics() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
