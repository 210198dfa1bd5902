/*!
# `DIM <name>(<max>)`

## Purpose
Declares an array of numbers.

## Remarks
Elements are numbered from 0 to `<max>` and start at zero. `<max>`
can't be more than 255. Arrays have one dimension. Declaring an
array again replaces it. Using an element outside the bounds is a
`SUBSCRIPT OUT OF RANGE` error; using an array never declared is
`VARIABLE NOT FOUND`.

## Example
```text
10 DIM A(3)
20 A(3)=7
30 PRINT A(0);A(3)
RUN
07
0/30
```

*/
