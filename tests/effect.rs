mod common;

mod tests {
    use myrtio_light_timer::color::{BLACK, Rgb, above_bottom, fill_bottom, hue_at};
    use myrtio_light_timer::config::{
        MENU_BRIGHTNESS_BASELINE, MENU_BRIGHTNESS_MAX, MENU_BRIGHTNESS_MIN, N_PIXELS,
    };
    use myrtio_light_timer::effect::{
        CountdownEffect, CountdownFrame, Direction, Effect, ExpiredEffect, MenuEffect,
    };
    use myrtio_light_timer::{Mode, Palette, SharedState, TimerSettings, TimerState};

    use crate::common::{MockTicker, boot, lit_count, lit_frame, machine, press_start};

    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 50 };
    const PULSE: Rgb = Rgb { r: 0, g: 50, b: 20 };
    const RED: Rgb = Rgb { r: 50, g: 0, b: 0 };

    #[test]
    fn test_fill_bottom() {
        let mut leds = [RED; 5];
        fill_bottom(&mut leds, 2, BLUE);
        assert_eq!(leds, [BLACK, BLACK, BLACK, BLUE, BLUE]);

        fill_bottom(&mut leds, 9, BLUE);
        assert_eq!(leds, [BLUE; 5]);

        fill_bottom(&mut leds, 0, BLUE);
        assert_eq!(leds, [BLACK; 5]);
    }

    #[test]
    fn test_above_bottom() {
        assert_eq!(above_bottom(30, 0), Some(29));
        assert_eq!(above_bottom(30, 3), Some(26));
        assert_eq!(above_bottom(30, 29), Some(0));
        assert_eq!(above_bottom(30, 30), None);
    }

    #[test]
    fn test_menu_brightness_ping_pong() {
        let mut menu = MenuEffect::new(0);
        assert_eq!(menu.brightness(), MENU_BRIGHTNESS_BASELINE);

        let mut previous = menu.brightness();
        let mut turned_at_top = false;
        let mut turned_at_bottom = false;
        for _ in 0..200 {
            menu.step();
            let current = menu.brightness();
            assert!((MENU_BRIGHTNESS_MIN..=MENU_BRIGHTNESS_MAX).contains(&current));
            if previous % 2 == 1 {
                assert!(current > previous, "{previous} -> {current}");
            } else {
                assert!(current < previous || current == MENU_BRIGHTNESS_MIN + 1);
            }
            turned_at_top |= current == MENU_BRIGHTNESS_MAX;
            turned_at_bottom |= previous == MENU_BRIGHTNESS_MIN;
            previous = current;
        }
        assert!(turned_at_top);
        assert!(turned_at_bottom);

        menu.reset();
        assert_eq!(menu.brightness(), MENU_BRIGHTNESS_BASELINE);
    }

    #[test]
    fn test_menu_render() {
        let mut menu = MenuEffect::new(24);
        let mut leds = [RED; N_PIXELS];
        menu.render(TimerSettings::new(4), &mut leds);

        assert_eq!(lit_count(&leds), 4);
        assert!(leds[..N_PIXELS - 4].iter().all(|led| *led == BLACK));
        let color = leds[N_PIXELS - 1];
        assert!(leds[N_PIXELS - 4..].iter().all(|led| *led == color));
        assert_ne!(color, BLACK);
        assert_eq!(color, hue_at(24, MENU_BRIGHTNESS_BASELINE + 2));
    }

    #[test]
    fn test_countdown_render() {
        let mut effect = CountdownEffect::new(BLUE, PULSE);
        let mut leds = [RED; N_PIXELS];
        effect.render(
            CountdownFrame {
                state: TimerState {
                    minutes_remaining: 3,
                    seconds_remaining: 40,
                },
                phase: 7,
            },
            &mut leds,
        );

        assert!(leds[..26].iter().all(|led| *led == BLACK));
        assert_eq!(leds[26], Rgb { r: 0, g: 57, b: 20 });
        assert!(leds[27..].iter().all(|led| *led == BLUE));
    }

    #[test]
    fn test_countdown_render_edges() {
        let mut effect = CountdownEffect::new(BLUE, PULSE);
        let mut leds = [RED; N_PIXELS];

        effect.render(
            CountdownFrame {
                state: TimerState::armed(0),
                phase: 0,
            },
            &mut leds,
        );
        assert_eq!(lit_count(&leds), 1);
        assert_eq!(leds[N_PIXELS - 1], PULSE);

        effect.render(
            CountdownFrame {
                state: TimerState::armed(30),
                phase: 63,
            },
            &mut leds,
        );
        assert_eq!(leds, [BLUE; N_PIXELS]);
    }

    #[test]
    fn test_expired_ping_pong() {
        let mut effect = ExpiredEffect::new(RED);
        let mut leds = [BLACK; N_PIXELS];

        let mut counts = Vec::new();
        for _ in 0..(4 * N_PIXELS) {
            effect.render((), &mut leds);
            counts.push(lit_count(&leds));
        }

        let mut expected = Vec::new();
        for _ in 0..2 {
            expected.extend(0..N_PIXELS);
            expected.extend((1..=N_PIXELS).rev());
        }
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_expired_reset() {
        let mut effect = ExpiredEffect::new(RED);
        for _ in 0..(N_PIXELS + 3) {
            effect.advance(N_PIXELS);
        }
        assert_eq!(effect.direction(), Direction::Down);
        assert_eq!(effect.lit(), N_PIXELS - 3);

        effect.reset();
        assert_eq!(effect.lit(), 0);
        assert_eq!(effect.direction(), Direction::Up);
    }

    #[test]
    fn test_expired_entry_resets_animation() {
        let shared = SharedState::with_minutes(0);
        let ticker = MockTicker::new();
        let mut machine = machine(&shared, &ticker);
        boot(&mut machine);

        for _ in 0..2 {
            press_start(&shared);
            machine.poll();
            ticker.fire(&shared);
            machine.poll();
            assert_eq!(machine.mode(), Mode::Expired);
            assert_eq!(machine.expired().lit(), 0);
            assert_eq!(machine.expired().direction(), Direction::Up);

            for _ in 0..5 {
                machine.update();
            }
            assert_eq!(lit_frame(machine.frame()), 4);

            press_start(&shared);
            machine.poll();
            assert_eq!(machine.mode(), Mode::Main);
        }
    }

    #[test]
    fn test_main_round_trip_renders_settings() {
        let shared = SharedState::with_minutes(6);
        let ticker = MockTicker::new();
        let mut machine = machine(&shared, &ticker);
        boot(&mut machine);

        machine.update();
        assert_eq!(lit_frame(machine.frame()), 6);

        press_start(&shared);
        machine.poll();
        ticker.set_counter(0x1400);
        machine.update();
        // Six minutes plus the pulse pixel
        assert_eq!(lit_frame(machine.frame()), 7);
        assert_eq!(machine.frame()[N_PIXELS - 7].g, Palette::default().pulse.g + 5);

        press_start(&shared);
        machine.poll();
        assert_eq!(machine.menu().brightness(), MENU_BRIGHTNESS_BASELINE);
        machine.update();
        assert_eq!(lit_frame(machine.frame()), 6);
    }
}
