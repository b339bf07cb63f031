use yew::prelude::*;

// Additive recurrence constants of the R2 sequence (plastic number).
const ALPHA_X: f64 = 0.754_877_666_246_692_8;
const ALPHA_Y: f64 = 0.569_840_290_998_053_2;

/// Placement and timing of one decorative dot, in percent and seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
}

/// Timing bounds for a particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub max_delay: f64,
    pub min_duration: f64,
    pub duration_span: f64,
}

/// Evenly spread, render-stable positions for `count` particles. `seed`
/// offsets the sequence so separate fields don't overlap.
pub fn layout(count: usize, seed: u32, pulse: Pulse) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let n = (i as f64) + f64::from(seed) + 1.0;
            let x = (0.5 + ALPHA_X * n).fract();
            let y = (0.5 + ALPHA_Y * n).fract();
            Particle {
                left: x * 100.0,
                top: y * 100.0,
                delay: ((x + y) * 0.5) * pulse.max_delay,
                duration: pulse.min_duration + y * pulse.duration_span,
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    pub count: usize,
    pub seed: u32,
    pub pulse: Pulse,
    #[prop_or_default]
    pub dot_class: Classes,
}

#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let particles = layout(props.count, props.seed, props.pulse);

    html! {
        <div class="particle-field">
            { for particles.iter().map(|p| html! {
                <div
                    class={classes!("particle", props.dot_class.clone())}
                    style={format!(
                        "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                        p.left, p.top, p.delay, p.duration
                    )}
                />
            }) }
            <style>
                {r#"
                .particle-field {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .particle {
                    position: absolute;
                    border-radius: 9999px;
                    animation-name: particle-pulse;
                    animation-iteration-count: infinite;
                    animation-timing-function: ease-in-out;
                }
                @keyframes particle-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.4; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: Pulse = Pulse {
        max_delay: 3.0,
        min_duration: 2.0,
        duration_span: 3.0,
    };

    #[test]
    fn stays_inside_bounds() {
        let particles = layout(50, 0, HERO);
        assert_eq!(particles.len(), 50);
        for p in particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((0.0..HERO.max_delay).contains(&p.delay));
            assert!(p.duration >= 2.0 && p.duration < 5.0);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(layout(20, 7, HERO), layout(20, 7, HERO));
        assert_ne!(layout(20, 7, HERO), layout(20, 8, HERO));
    }
}
