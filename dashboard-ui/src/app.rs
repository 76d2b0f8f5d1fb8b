//! App Root Component

use leptos::*;

use crate::pages::Dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 text-gray-800">
            <header class="bg-white shadow-sm">
                <div class="container mx-auto px-4 py-4">
                    <h1 class="text-2xl font-bold">"Dashboard de Sentimentos"</h1>
                </div>
            </header>

            <main class="container mx-auto px-4 py-8">
                <Dashboard />
            </main>
        </div>
    }
}
