// proxy/routes.rs - static route table for every proxied resource
//
// Inbound patterns use axum `:param` segments; upstream templates reuse the
// same parameter names.

use super::{ProxyRoute, RouteMethod};

pub static ROUTES: &[ProxyRoute] = &[
    // Authentication
    ProxyRoute::new("auth.login", RouteMethod::Post, "/api/auth/login", "/auth/login", "Login failed")
        .public()
        .issues_session(),
    ProxyRoute::new("auth.admin_login", RouteMethod::Post, "/api/auth/admin/login", "/auth/admin/login", "Admin login failed")
        .public()
        .issues_session(),
    ProxyRoute::new("auth.register", RouteMethod::Post, "/api/auth/register", "/auth/register", "Registration failed")
        .public()
        .preserve_status(),
    ProxyRoute::new("auth.verify_email", RouteMethod::Post, "/api/auth/verify-email", "/auth/verify-email", "Email verification failed")
        .public(),
    ProxyRoute::new("auth.resend_verification", RouteMethod::Post, "/api/auth/resend-verification", "/auth/resend-verification", "Failed to resend verification email")
        .public(),
    ProxyRoute::new("auth.forgot_password", RouteMethod::Post, "/api/auth/forgot-password", "/auth/forgot-password", "Failed to send reset email")
        .public(),
    ProxyRoute::new("auth.reset_password", RouteMethod::Post, "/api/auth/reset-password", "/auth/reset-password", "Failed to reset password")
        .public(),
    ProxyRoute::new("auth.change_password", RouteMethod::Put, "/api/auth/change-password", "/auth/change-password", "Failed to change password"),
    ProxyRoute::new("auth.session", RouteMethod::Get, "/api/auth/session", "/auth/me", "Failed to fetch session"),
    // Onboarding and profile
    ProxyRoute::new("onboarding.submit", RouteMethod::Post, "/api/onboarding", "/users/onboarding", "Failed to save onboarding"),
    ProxyRoute::new("profile.get", RouteMethod::Get, "/api/profile", "/users/profile", "Failed to fetch profile"),
    ProxyRoute::new("profile.update", RouteMethod::Put, "/api/profile", "/users/profile", "Failed to update profile"),
    // Courses
    ProxyRoute::new("courses.list", RouteMethod::Get, "/api/courses", "/courses", "Failed to fetch courses").public(),
    ProxyRoute::new("courses.create", RouteMethod::Post, "/api/courses", "/courses", "Failed to create course").preserve_status(),
    ProxyRoute::new("courses.get", RouteMethod::Get, "/api/courses/:id", "/courses/:id", "Failed to fetch course").public(),
    ProxyRoute::new("courses.update", RouteMethod::Put, "/api/courses/:id", "/courses/:id", "Failed to update course"),
    ProxyRoute::new("courses.delete", RouteMethod::Delete, "/api/courses/:id", "/courses/:id", "Failed to delete course"),
    ProxyRoute::new("courses.recommend", RouteMethod::Get, "/api/recommend", "/courses/recommended", "Failed to fetch recommendations").public(),
    // Lessons
    ProxyRoute::new("lessons.list", RouteMethod::Get, "/api/courses/:id/lessons", "/courses/:id/lessons", "Failed to fetch lessons"),
    ProxyRoute::new("lessons.create", RouteMethod::Post, "/api/courses/:id/lessons", "/courses/:id/lessons", "Failed to create lesson").preserve_status(),
    ProxyRoute::new("lessons.get", RouteMethod::Get, "/api/lessons/:id", "/lessons/:id", "Failed to fetch lesson"),
    ProxyRoute::new("lessons.update", RouteMethod::Put, "/api/lessons/:id", "/lessons/:id", "Failed to update lesson"),
    ProxyRoute::new("lessons.delete", RouteMethod::Delete, "/api/lessons/:id", "/lessons/:id", "Failed to delete lesson"),
    // Enrollments
    ProxyRoute::new("enrollments.list", RouteMethod::Get, "/api/enrollments", "/enrollments", "Failed to fetch enrollments"),
    ProxyRoute::new("enrollments.create", RouteMethod::Post, "/api/enrollments", "/enrollments", "Failed to create enrollment").preserve_status(),
    ProxyRoute::new("enrollments.get", RouteMethod::Get, "/api/enrollments/:id", "/enrollments/:id", "Failed to fetch enrollment"),
    ProxyRoute::new("enrollments.update", RouteMethod::Put, "/api/enrollments/:id", "/enrollments/:id", "Failed to update enrollment"),
    ProxyRoute::new("enrollments.delete", RouteMethod::Delete, "/api/enrollments/:id", "/enrollments/:id", "Failed to delete enrollment"),
    // Cart, checkout and payments
    ProxyRoute::new("cart.get", RouteMethod::Get, "/api/cart", "/cart", "Failed to fetch cart"),
    ProxyRoute::new("cart.add", RouteMethod::Post, "/api/cart", "/cart", "Failed to add to cart").preserve_status(),
    ProxyRoute::new("cart.clear", RouteMethod::Delete, "/api/cart", "/cart", "Failed to clear cart"),
    ProxyRoute::new("cart.remove", RouteMethod::Delete, "/api/cart/:id", "/cart/:id", "Failed to remove from cart"),
    ProxyRoute::new("checkout.create", RouteMethod::Post, "/api/checkout", "/checkout", "Checkout failed").preserve_status(),
    ProxyRoute::new("payments.history", RouteMethod::Get, "/api/payments/history", "/payments/history", "Failed to fetch payment history"),
    // Reviews
    ProxyRoute::new("reviews.list", RouteMethod::Get, "/api/courses/:id/reviews", "/courses/:id/reviews", "Failed to fetch reviews").public(),
    ProxyRoute::new("reviews.create", RouteMethod::Post, "/api/courses/:id/reviews", "/courses/:id/reviews", "Failed to create review").preserve_status(),
    ProxyRoute::new("reviews.update", RouteMethod::Put, "/api/reviews/:id", "/reviews/:id", "Failed to update review"),
    ProxyRoute::new("reviews.delete", RouteMethod::Delete, "/api/reviews/:id", "/reviews/:id", "Failed to delete review"),
    // Contributors
    ProxyRoute::new("contributors.list", RouteMethod::Get, "/api/contributors", "/contributors", "Failed to fetch contributors").public(),
    ProxyRoute::new("contributors.create", RouteMethod::Post, "/api/contributors", "/contributors", "Failed to create contributor").preserve_status(),
    ProxyRoute::new("contributors.get", RouteMethod::Get, "/api/contributors/:id", "/contributors/:id", "Failed to fetch contributor").public(),
    ProxyRoute::new("contributors.update", RouteMethod::Put, "/api/contributors/:id", "/contributors/:id", "Failed to update contributor"),
    ProxyRoute::new("contributors.delete", RouteMethod::Delete, "/api/contributors/:id", "/contributors/:id", "Failed to delete contributor"),
    // Admin dashboard
    ProxyRoute::new("admin.analytics", RouteMethod::Get, "/api/admin/analytics", "/admin/analytics", "Failed to fetch analytics"),
    ProxyRoute::new("admin.users", RouteMethod::Get, "/api/admin/users", "/admin/users", "Failed to fetch users"),
    ProxyRoute::new("admin.courses", RouteMethod::Get, "/api/admin/courses", "/admin/courses", "Failed to fetch courses"),
];

/// Look up a route by its table name
pub fn find(name: &str) -> Option<&'static ProxyRoute> {
    ROUTES.iter().find(|route| route.name == name)
}
