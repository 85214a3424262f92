//! Native window and webview for the Zync shell, built with `tao` + `wry`.
//!
//! The webview fills the window's client area: on Linux it is packed into
//! the GTK default vbox, elsewhere wry sizes it to the window.

use std::borrow::Cow;

use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop};
use tao::window::{Window, WindowBuilder};
use wry::http::header::CONTENT_TYPE;
use wry::http::{HeaderValue, Request, Response, StatusCode};
use wry::{WebView, WebViewBuilder};

use crate::app::{App, LaunchPlan};
use crate::managers::window_shell::{BrowserEngine, MainWindow};
use crate::services::asset_server::{webview_url, AssetServer};
use crate::types::errors::ShellError;

/// `wry` webview behind the shell's browser seam.
pub struct WryBrowser {
    webview: WebView,
}

impl BrowserEngine for WryBrowser {
    fn load_url(&mut self, url: &str) -> Result<(), ShellError> {
        self.webview
            .load_url(&webview_url(url))
            .map_err(|e| ShellError::Browser(e.to_string()))
    }
}

/// The shell's widgets. The webview is declared first so it is dropped
/// before the native window that hosts it.
struct Shell {
    main_window: MainWindow<WryBrowser>,
    _native: Window,
}

fn respond(status: StatusCode, mime: &'static str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Owned(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(mime));
    response
}

/// Answers one request on the bundled-asset scheme.
fn asset_response(server: &AssetServer, request: &Request<Vec<u8>>) -> Response<Cow<'static, [u8]>> {
    let reply = server.respond(request.uri().path());
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    respond(status, reply.mime, reply.body)
}

fn build_shell(plan: LaunchPlan, event_loop: &EventLoop<()>) -> Result<Shell, ShellError> {
    let native = WindowBuilder::new()
        .with_title(plan.window.title.as_str())
        .with_inner_size(LogicalSize::new(
            plan.window.size.width,
            plan.window.size.height,
        ))
        .build(event_loop)
        .map_err(|e| ShellError::Window(e.to_string()))?;

    let mut builder = WebViewBuilder::new().with_devtools(cfg!(debug_assertions));

    if let Some(scheme) = plan.asset_scheme.clone() {
        let server = AssetServer::new(plan.asset_root.clone());
        tracing::debug!(%scheme, root = %server.root().display(), "serving bundled assets");
        builder = builder.with_custom_protocol(scheme, move |_wv_id, request| {
            asset_response(&server, &request)
        });
    }

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = native
            .default_vbox()
            .ok_or_else(|| ShellError::Window("GTK vbox unavailable".to_string()))?;
        builder
            .build_gtk(vbox)
            .map_err(|e| ShellError::Browser(e.to_string()))?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder
        .build(&native)
        .map_err(|e| ShellError::Browser(e.to_string()))?;

    let main_window = MainWindow::new(plan.window, WryBrowser { webview }, &plan.start_url)?;

    Ok(Shell {
        main_window,
        _native: native,
    })
}

/// Opens the shell and runs the event loop until the window is closed.
///
/// Only returns on a startup error.
pub fn run(mut app: App) -> Result<(), ShellError> {
    let plan = app.launch_plan()?;
    let event_loop = EventLoop::new();
    let shell = build_shell(plan, &event_loop)?;
    tracing::debug!(url = %shell.main_window.requested_url(), "event loop starting");

    let mut shell = Some(shell);
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        if let Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } = event
        {
            app.shutdown();
            shell.take();
            *control_flow = ControlFlow::Exit;
        }
    })
}
