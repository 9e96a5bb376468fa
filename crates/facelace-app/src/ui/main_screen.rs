use eframe::egui::{Ui, vec2};
use egui_extras::{Size, StripBuilder};

use super::{controls, cube_net, move_list, palette, status_line};
use crate::{
    action::ActionRequestQueue,
    ui::{
        controls::ControlsViewModel,
        cube_net::CubeNetViewModel,
        layout::{ComponentUnits, LayoutScale},
        move_list::MoveListViewModel,
        palette::PaletteViewModel,
        status_line::StatusLineViewModel,
    },
};

#[derive(Debug, Clone)]
pub(crate) struct MainScreenViewModel<'a> {
    pub(crate) net_vm: CubeNetViewModel,
    pub(crate) palette_vm: PaletteViewModel,
    pub(crate) controls_vm: ControlsViewModel,
    pub(crate) move_list_vm: MoveListViewModel<'a>,
    pub(crate) status_line_vm: StatusLineViewModel<'a>,
}

fn screen_units() -> ComponentUnits {
    cube_net::required_units()
        .stack(palette::required_units())
        .stack(controls::required_units())
        .stack(move_list::required_units())
        .stack(status_line::required_units())
}

pub(crate) fn show(ui: &mut Ui, vm: &MainScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let spacing = ui.spacing().item_spacing;
    let avail = ui.available_size() - spacing * vec2(2.0, 6.0);
    let scale = LayoutScale::fit(avail, screen_units());
    let content_width = scale.size_of(screen_units()).x;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(content_width))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(scale.size_of(cube_net::required_units()).y))
                    .size(Size::exact(scale.size_of(palette::required_units()).y))
                    .size(Size::exact(scale.size_of(controls::required_units()).y))
                    .size(Size::exact(scale.size_of(move_list::required_units()).y))
                    .size(Size::exact(scale.size_of(status_line::required_units()).y))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            cube_net::show(ui, &vm.net_vm, &scale, action_queue);
                        });
                        strip.cell(|ui| {
                            palette::show(ui, &vm.palette_vm, &scale, action_queue);
                        });
                        strip.cell(|ui| {
                            controls::show(ui, &vm.controls_vm, &scale, action_queue);
                        });
                        strip.cell(|ui| {
                            move_list::show(ui, &vm.move_list_vm, &scale, action_queue);
                        });
                        strip.cell(|ui| {
                            status_line::show(ui, &vm.status_line_vm, &scale);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
