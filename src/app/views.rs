//! The demo views: a shared layout, the home and login pages, the
//! old-path redirect and the catch-all page.

use std::sync::Arc;

use crate::component::{IntoPage, Page, PageElement};
use crate::router::ViewFn;

const LAYOUT_CSS: &str = "\
body { margin: 0; font-family: sans-serif; }
.app-nav { padding: 8px 16px; background: #f2f2f2; }
.app-nav a { margin-right: 12px; }
";

const HOME_CSS: &str = "\
.home-greeting { font-weight: bold; }
.home-list div { padding: 2px 0; }
";

const LOGIN_CSS: &str = "\
.login-form input { display: block; margin-bottom: 8px; }
";

/// The application shell: navigation plus the nested page content.
pub fn layout() -> ViewFn {
	let view: ViewFn = Arc::new(|_scope, outlet| {
		PageElement::new("div")
			.attr("class", "app")
			.child(
				PageElement::new("nav")
					.attr("class", "app-nav")
					.child(PageElement::new("a").attr("href", "/").child("Home"))
					.child(PageElement::new("a").attr("href", "/login").child("Login")),
			)
			.child(outlet)
			.into_page()
	});
	crate::component::styled(view, LAYOUT_CSS)
}

/// The home page: greets the current name and lists the loaded items.
pub fn home() -> ViewFn {
	let view: ViewFn = Arc::new(|scope, _outlet| {
		scope
			.ctx
			.head_mut()
			.set_title("Home")
			.add_meta("description", "A server-rendered list of items");

		let home = scope.store.state().home;
		let items: Vec<Page> = home
			.list
			.iter()
			.map(|item| {
				PageElement::new("div")
					.attr("data-id", item.id.clone())
					.child(item.title.clone())
					.into_page()
			})
			.collect();

		PageElement::new("div")
			.attr("class", "home")
			.child(
				PageElement::new("p")
					.attr("class", "home-greeting")
					.child(format!("name is {}", home.name)),
			)
			.child(PageElement::new("div").attr("class", "home-list").children(items))
			.into_page()
	});
	crate::component::styled(view, HOME_CSS)
}

/// The login page. Static; no loader.
pub fn login() -> ViewFn {
	let view: ViewFn = Arc::new(|scope, _outlet| {
		scope.ctx.head_mut().set_title("Login");

		PageElement::new("form")
			.attr("class", "login-form")
			.attr("method", "post")
			.attr("action", "/api/login")
			.child(
				PageElement::new("input")
					.attr("type", "text")
					.attr("name", "name")
					.attr("placeholder", "name"),
			)
			.child(PageElement::new("button").attr("type", "submit").child("Sign in"))
			.into_page()
	});
	crate::component::styled(view, LOGIN_CSS)
}

/// The retired `/home` path. Records a permanent redirect to `/` and
/// renders nothing; the request handler turns the record into a 301.
pub fn home_redirect() -> ViewFn {
	Arc::new(|scope, _outlet| {
		scope.ctx.redirect_replace("/");
		Page::Empty
	})
}

/// The catch-all page: flags the render as not-found so the handler
/// responds 404, while still producing a full document.
pub fn not_found() -> ViewFn {
	Arc::new(|scope, _outlet| {
		scope.ctx.head_mut().set_title("Not Found");
		scope.ctx.set_not_found();

		PageElement::new("div")
			.attr("class", "not-found")
			.child(PageElement::new("h1").child("Page not found"))
			.child(PageElement::new("p").child("The page you requested does not exist."))
			.into_page()
	})
}
