use yew::prelude::*;

use crate::content::agency::FEATURE_TILES;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="features">
            <style>
                {r#"
                .features {
                    padding: 3rem 2rem 4rem;
                }
                .features-inner {
                    max-width: 1600px;
                    margin: 0 auto;
                }
                .features-headlines, .features-images {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .features-headlines {
                    margin-bottom: 2.5rem;
                }
                .features-headlines h3 {
                    color: var(--brand-primary);
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: 0.025em;
                    margin: 0;
                    transition: letter-spacing 0.3s ease;
                }
                .features-headlines h3:hover {
                    letter-spacing: 0.05em;
                }
                .feature-image {
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    border-radius: 12px;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    transition: all 0.5s ease;
                }
                .feature-image:hover {
                    transform: translateY(-8px);
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.15);
                }
                .feature-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .feature-image:hover img {
                    transform: scale(1.1);
                }
                @media (max-width: 768px) {
                    .features-headlines, .features-images {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
            <div class="features-inner">
                <div class="features-headlines">
                    { for FEATURE_TILES.iter().enumerate().map(|(i, tile)| html! {
                        <div class="fade-in-up" style={format!("animation-delay: {}ms;", i * 100)}>
                            <h3>{ tile.headline }</h3>
                        </div>
                    }) }
                </div>
                <div class="features-images">
                    { for FEATURE_TILES.iter().map(|tile| html! {
                        <div class="feature-image">
                            <img src={tile.image} alt={tile.image_alt} loading="lazy" />
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
