use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Summary;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let summary = Summary::new(app.summary_props());
    frame.render_widget(summary.widget(), header);

    frame.render_widget(Clear, body);
    let list = app.list_view();
    frame.render_widget(&list, body);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}
