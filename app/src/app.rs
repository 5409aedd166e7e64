use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use egui_float_menu::{FloatMenu, FloatMenuOptions, MenuItem, TextItem, make_items};

/// Stand-in for the host game's spawnable content.
const SAMPLE_THINGS: &[&str] = &[
    "Steel longsword",
    "Wooden shield",
    "Iron helmet",
    "Leather boots",
    "Healing potion",
    "Mana potion",
    "Throwing knife",
    "Crossbow",
    "Quiver of bolts",
    "Torch",
    "Lockpick set",
    "Rope (30 ft)",
    "Grappling hook",
    "Smoke bomb",
    "Campfire kit",
    "Field rations",
];

pub struct DemoApp {
    menu: Option<FloatMenu>,
    last_picked: Rc<RefCell<Option<String>>>,
    columns: usize,
    searchable: bool,
}

impl DemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            menu: None,
            last_picked: Rc::new(RefCell::new(None)),
            columns: 2,
            searchable: true,
        }
    }

    fn open_menu(&mut self, pos: egui::Pos2) {
        let picked = Rc::clone(&self.last_picked);
        let items = make_items(SAMPLE_THINGS.iter().copied(), |name| {
            Some(Box::new(TextItem::new(name).with_payload(name.to_owned())) as Box<dyn MenuItem>)
        });
        let options = FloatMenuOptions::new(items)
            .columns(self.columns)
            .can_search(self.searchable)
            .on_selected(move |item| {
                let Some(payload) = item.payload() else { return };
                match payload.get::<String>() {
                    Ok(name) => *picked.borrow_mut() = Some(name.clone()),
                    Err(err) => log::error!("unexpected selection payload: {err}"),
                }
            });
        self.menu = Some(FloatMenu::new(pos, options));
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Float menu demo");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Columns:");
                ui.add(egui::Slider::new(&mut self.columns, 1..=4));
                ui.checkbox(&mut self.searchable, "Searchable");
            });
            ui.add_space(8.0);

            let response = ui.button("Pick a thing...");
            if response.clicked() {
                self.open_menu(response.rect.left_bottom());
            }

            if let Some(name) = self.last_picked.borrow().as_ref() {
                ui.add_space(8.0);
                ui.label(format!("Last picked: {name}"));
            }
        });

        if let Some(menu) = self.menu.as_mut() {
            if !menu.show(ctx).open {
                self.menu = None;
            }
        }
    }
}
