fn main() {
    nv::term::main()
}
